// One shared matchmaking server per integration-test binary.
use std::{
    // `Arc` lets the server thread and the caller share the URL slot; `OnceLock` fills it once.
    sync::{Arc, OnceLock},
    // Used for the short sleeps while polling for startup.
    time::Duration,
};

// Base URL every test in the binary talks to.
static SERVER_URL: OnceLock<String> = OnceLock::new();
// Guards the bootstrap so concurrent tests start only one server.
static SERVER_READY: OnceLock<()> = OnceLock::new();

// Start the server if needed and return its base URL.
pub fn ensure_server() -> &'static str {
    // The first caller boots the server; the rest block here until it is up.
    SERVER_READY.get_or_init(|| {
        // Slot the server thread writes its bound address into.
        let published_url = Arc::new(OnceLock::<String>::new());
        // Second handle moved into the server thread.
        let published_url_thread = Arc::clone(&published_url);
        // A plain OS thread, because each `#[tokio::test]` runtime dies with its test.
        std::thread::spawn(move || {
            // The server owns its runtime for the life of the test process.
            let runtime = tokio::runtime::Runtime::new().expect("test runtime");
            runtime.block_on(async move {
                // Port 0 lets the OS choose, so parallel test binaries never clash.
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind ephemeral test port");
                // Read back the port the OS actually handed out.
                let addr = listener.local_addr().expect("get local addr");
                // Tell the waiting test thread where to connect.
                let _ = published_url_thread.set(format!("http://{}", addr));
                // Same entry point the binary uses, minus config and logging setup.
                matchmaking::run(listener).await.expect("server failed");
            });
        });
        // Do not hand out the URL until a TCP connect succeeds.
        wait_until_accepting(published_url);
    });

    SERVER_URL
        .get()
        .expect("server url should be initialized")
        .as_str()
}

// Block until the URL is published and the socket accepts connections.
fn wait_until_accepting(published_url: Arc<OnceLock<String>>) {
    // Spin on the slot; the server thread fills it right after binding.
    let base_url = loop {
        if let Some(url) = published_url.get() {
            break url.clone();
        }
        std::thread::sleep(Duration::from_millis(10));
    };

    // Store it globally for every later `ensure_server` caller.
    let _ = SERVER_URL.set(base_url.clone());

    // Raw TCP probing needs host:port without the scheme.
    let addr = base_url
        .strip_prefix("http://")
        .expect("base url should use http://");

    // About two seconds of retries covers the bind-to-serve gap.
    for _ in 0..100 {
        if std::net::TcpStream::connect(addr).is_ok() {
            return;
        }
        std::thread::sleep(Duration::from_millis(20));
    }

    // Better a loud failure here than confusing connection errors in every test.
    panic!("server did not become ready in time");
}
