use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::task::JoinHandle;

use anteroom::{
    app::{App, Intent, ViewEvent},
    config::Config,
    store::{home::HomeState, session::Screen},
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let Some(credentials) = config.login.clone() else {
        tracing::info!("Set LOGIN_USERNAME and LOGIN_PASSWORD to run the scripted flow");
        return;
    };

    tracing::info!("Using API at {}", config.api_base_url);

    let (app, mut view_rx) = App::new(&config);
    let (intent_tx, intent_rx) = mpsc::unbounded_channel();
    let controller = tokio::spawn(app.run(intent_rx));

    // Walk the same path the interactive client would: log in, load both
    // home screen views, clear them, and log out.
    let _ = intent_tx.send(Intent::SubmitLogin {
        username: credentials.username,
        password: credentials.password,
    });

    if !wait_login(&mut view_rx).await {
        tracing::error!("Login failed, aborting flow");
        drop(intent_tx);
        drain(view_rx, controller).await;
        std::process::exit(1);
    }

    let _ = intent_tx.send(Intent::FetchSingleUser);
    wait_home(&mut view_rx, |home| !home.loading_single_user).await;

    let _ = intent_tx.send(Intent::ClearSingleUser);
    wait_home(&mut view_rx, |home| home.single_user.is_none()).await;

    let _ = intent_tx.send(Intent::FetchUsersList);
    wait_home(&mut view_rx, |home| !home.loading_users).await;

    let _ = intent_tx.send(Intent::ClearUsersList);
    wait_home(&mut view_rx, |home| home.users.is_empty()).await;

    let _ = intent_tx.send(Intent::Logout);
    wait_screen(&mut view_rx, Screen::Login).await;

    drop(intent_tx);
    drain(view_rx, controller).await;

    tracing::info!("Flow complete");
}

/// Waits for the login attempt to settle.
///
/// A successful attempt swaps the screen before its notice arrives; a
/// failed one only emits the notice.
async fn wait_login(view_rx: &mut UnboundedReceiver<ViewEvent>) -> bool {
    while let Some(event) = view_rx.recv().await {
        let settled = match &event {
            ViewEvent::ScreenChanged(Screen::Home) => Some(true),
            ViewEvent::Notice(_) => Some(false),
            _ => None,
        };

        render(&event);

        if let Some(logged_in) = settled {
            return logged_in;
        }
    }

    false
}

/// Waits for a home screen snapshot matching `settled`.
async fn wait_home(
    view_rx: &mut UnboundedReceiver<ViewEvent>,
    settled: impl Fn(&HomeState) -> bool,
) {
    while let Some(event) = view_rx.recv().await {
        render(&event);

        if let ViewEvent::HomeChanged(home) = &event {
            if settled(home) {
                return;
            }
        }
    }
}

/// Waits for the view to swap to `screen`.
async fn wait_screen(view_rx: &mut UnboundedReceiver<ViewEvent>, screen: Screen) {
    while let Some(event) = view_rx.recv().await {
        render(&event);

        if matches!(event, ViewEvent::ScreenChanged(s) if s == screen) {
            return;
        }
    }
}

/// Renders any events still in flight, then joins the controller.
async fn drain(mut view_rx: UnboundedReceiver<ViewEvent>, controller: JoinHandle<()>) {
    while let Some(event) = view_rx.recv().await {
        render(&event);
    }

    let _ = controller.await;
}

/// Stands in for the view layer by logging each event as it would render.
fn render(event: &ViewEvent) {
    match event {
        ViewEvent::ScreenChanged(screen) => tracing::info!("Screen changed to {:?}", screen),
        ViewEvent::Notice(notice) => tracing::info!("Notice: {notice}"),
        ViewEvent::HomeChanged(home) => {
            if let Some(user) = &home.single_user {
                tracing::info!("Single user: {} <{}>", user.full_name(), user.email);
            }

            tracing::info!(
                "Home: {} users listed, loading single user: {}, loading users: {}",
                home.users.len(),
                home.loading_single_user,
                home.loading_users
            );
        }
    }
}
