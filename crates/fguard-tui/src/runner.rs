//! Async runner: wires terminal events, the update loop, and API tasks

use tokio::sync::mpsc;

use fguard_api::ApiClient;
use fguard_app::config::Settings;
use fguard_app::handler::UpdateAction;
use fguard_app::message::Message;
use fguard_app::state::AppState;
use fguard_app::{actions, update, UpdateResult};
use fguard_core::prelude::*;

use crate::{event, render};

/// Message channel depth. Poll results and key presses are small; 256 is
/// plenty of slack before senders ever block.
const CHANNEL_CAPACITY: usize = 256;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Run the TUI until the user quits.
pub async fn run(settings: Settings) -> Result<()> {
    let api = ApiClient::new(&settings.server.base_url)?;
    info!("using backend at {}", api.base_url());

    install_panic_hook();
    let mut terminal = ratatui::init();

    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);
    spawn_input_thread(msg_tx.clone());

    let mut state = AppState::new(settings);

    // One-shot reachability probe; the header reflects the answer.
    actions::handle_action(&mut state, &api, &msg_tx, UpdateAction::CheckHealth);

    let result = event_loop(&mut terminal, &mut state, &api, &msg_tx, &mut msg_rx).await;

    // Whatever the outcome, leave no poll task running behind the restored
    // terminal.
    state.timer.cancel_poll();
    ratatui::restore();
    result
}

async fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    api: &ApiClient,
    msg_tx: &mpsc::Sender<Message>,
    msg_rx: &mut mpsc::Receiver<Message>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render::view(frame, state))?;

        // Block until something happens, then drain the backlog before the
        // next draw.
        let Some(msg) = msg_rx.recv().await else {
            return Err(Error::ChannelClosed);
        };
        process_message(state, api, msg_tx, msg);
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, api, msg_tx, msg);
        }

        if state.should_quit {
            return Ok(());
        }
    }
}

/// Run one message through `update()`, executing returned actions and
/// follow-up messages until the chain is exhausted.
fn process_message(
    state: &mut AppState,
    api: &ApiClient,
    msg_tx: &mpsc::Sender<Message>,
    msg: Message,
) {
    let mut next = Some(msg);
    while let Some(msg) = next.take() {
        let UpdateResult { message, action } = update(state, msg);
        if let Some(action) = action {
            actions::handle_action(state, api, msg_tx, action);
        }
        next = message;
    }
}

/// Terminal input runs on its own thread: crossterm polling is blocking and
/// must not stall the async runtime. The thread exits when the channel
/// closes.
fn spawn_input_thread(msg_tx: mpsc::Sender<Message>) {
    std::thread::spawn(move || loop {
        match event::poll() {
            Ok(Some(msg)) => {
                if msg_tx.blocking_send(msg).is_err() {
                    break;
                }
            }
            Ok(None) => {}
            Err(e) => {
                error!("terminal input error: {e}");
                break;
            }
        }
    });
}
