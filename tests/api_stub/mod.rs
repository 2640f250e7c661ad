use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use serde_json::{Value, json};

/// Local stand-in for the character API.
///
/// - pages 1 and 2 exist (`info.pages == 2`)
/// - page 3 answers 404, page 7 answers a non-JSON 200, page 99 answers 500
/// - characters 1 and 3 exist; other ids answer 404
pub struct ApiStub {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
    shutdown_tx: Option<mpsc::Sender<()>>,
    handle: Option<thread::JoinHandle<()>>,
}

#[allow(dead_code)]
impl ApiStub {
    pub fn spawn() -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("start api stub server");
        let addr = server.server_addr();
        let base_url = format!("http://{addr}/api");

        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || {
            loop {
                if shutdown_rx.try_recv().is_ok() {
                    break;
                }

                let request = match server.recv_timeout(Duration::from_millis(50)) {
                    Ok(Some(req)) => req,
                    Ok(None) => continue,
                    Err(_) => break,
                };

                let url = request.url().to_string();
                seen.lock().expect("lock request log").push(url.clone());

                let (status, body) = route(&url);
                let header =
                    tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                        .expect("build header");
                let response = tiny_http::Response::from_string(body)
                    .with_status_code(status)
                    .with_header(header);
                let _ = request.respond(response);
            }
        });

        Self {
            base_url,
            requests,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("lock request log").clone()
    }
}

impl Drop for ApiStub {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn route(url: &str) -> (u16, String) {
    let (path, query) = url.split_once('?').unwrap_or((url, ""));
    if path == "/api/character/" || path == "/api/character" {
        let page = query
            .split('&')
            .find_map(|pair| pair.strip_prefix("page="))
            .unwrap_or("1");
        return match page {
            "1" => (
                200,
                page_body(
                    vec![
                        character(1, "Rick Sanchez", "Alive", "Human", "", "Male"),
                        character(2, "Morty Smith", "Alive", "Human", "", "Male"),
                        character(3, "Birdperson", "Dead", "Alien", "Bird-Person", "Male"),
                    ],
                    2,
                ),
            ),
            "2" => (
                200,
                page_body(
                    vec![
                        character(4, "Summer Smith", "Alive", "Human", "", "Female"),
                        character(5, "Abradolf Lincler", "unknown", "Human", "Genetic experiment", "Male"),
                    ],
                    2,
                ),
            ),
            "7" => (200, "<html>maintenance</html>".to_owned()),
            "99" => (500, json!({ "error": "internal failure" }).to_string()),
            _ => (404, json!({ "error": "There is nothing here" }).to_string()),
        };
    }

    if let Some(id) = path.strip_prefix("/api/character/") {
        return match id {
            "1" => (200, character(1, "Rick Sanchez", "Alive", "Human", "", "Male").to_string()),
            "3" => (
                200,
                character(3, "Birdperson", "Dead", "Alien", "Bird-Person", "Male").to_string(),
            ),
            _ => (404, json!({ "error": "Character not found" }).to_string()),
        };
    }

    (404, json!({ "error": "There is nothing here" }).to_string())
}

fn page_body(results: Vec<Value>, pages: u32) -> String {
    json!({
        "info": { "count": results.len(), "pages": pages, "next": null, "prev": null },
        "results": results,
    })
    .to_string()
}

fn character(id: u64, name: &str, status: &str, species: &str, subtype: &str, gender: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "status": status,
        "species": species,
        "type": subtype,
        "gender": gender,
        "origin": { "name": "Earth (C-137)", "url": "" },
        "location": { "name": "Citadel of Ricks", "url": "" },
        "image": format!("https://example.test/avatar/{id}.jpeg"),
        "episode": ["https://example.test/episode/1", "https://example.test/episode/2"],
        "url": format!("https://example.test/character/{id}"),
        "created": "2017-11-04T18:48:46.250Z",
    })
}
