//! Static host for the landing page. All behavior lives in the frontend;
//! the server only serves the app shell and public assets.

use moon::*;

async fn frontend() -> Frontend {
    Frontend::new()
        .title("Legends Road Rally")
        .index_by_robots(true)
}

async fn up_msg_handler(_: UpMsgRequest<()>) {}

#[moon::main]
async fn main() -> std::io::Result<()> {
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("BACKEND PANIC: {panic_info:?}");
    }));
    start(frontend, up_msg_handler, |_| {}).await
}
