use crate::{config, server, warning};

pub async fn serve(open: bool) {
    let addr = config::server_addr();
    let state = server::AppState::from_env();

    let server_task = tokio::spawn(async move {
        server::start_api_server(state).await;
    });

    if open {
        let url = format!("http://{}", addr);
        if webbrowser::open(&url).is_err() {
            warning!(
                "Failed to open browser. Please navigate to the following URL manually:\n{}",
                url
            );
        }
    }

    let _ = server_task.await;
}
