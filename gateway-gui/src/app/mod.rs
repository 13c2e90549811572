pub mod config;
pub mod error;
pub mod message;
pub mod route;
pub mod state;
pub mod view;

use std::sync::Arc;

use gateway_ui::widget::Element;
use iced::{Subscription, Task};

use crate::{
    convert::{FeeSchedule, ReceiveAmount},
    services::gateway::GatewayBackend,
    session::Session,
    transaction::Transaction,
};

use config::Config;
use message::Message;
use route::Route;
use state::{DepositForm, HowToPanel, State, StatusPanel};

pub struct App {
    config: Config,
    backend: Arc<dyn GatewayBackend + Sync + Send>,
    converter: Arc<dyn ReceiveAmount + Send + Sync>,
    session: Session,
    route: Route,
    panel: Box<dyn State>,
}

impl App {
    pub fn new(
        config: Config,
        backend: Arc<dyn GatewayBackend + Sync + Send>,
    ) -> (App, Task<Message>) {
        let converter: Arc<dyn ReceiveAmount + Send + Sync> =
            Arc::new(FeeSchedule::new(config.deposit_fee_percent));
        let panel = deposit_form(&config, &backend, &converter);
        let app = App {
            config,
            backend: backend.clone(),
            converter,
            session: Session::default(),
            route: Route::Deposit,
            panel,
        };
        (
            app,
            Task::perform(
                async move { backend.csrf_token().await },
                Message::CsrfToken,
            ),
        )
    }

    pub fn title(&self) -> String {
        match &self.route {
            Route::Deposit => "DASH Gateway - Deposit".to_string(),
            Route::HowTo => "DASH Gateway - How to deposit".to_string(),
            Route::Status(_) => "DASH Gateway - Transaction status".to_string(),
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    fn navigate(&mut self, route: Route) -> Task<Message> {
        tracing::debug!("Navigating to {}", route.path());
        self.panel = match &route {
            Route::Deposit => deposit_form(&self.config, &self.backend, &self.converter),
            Route::HowTo => Box::new(HowToPanel::new(self.backend.clone())),
            Route::Status(url) => Box::new(StatusPanel::new(
                self.backend.clone(),
                url.clone(),
                self.config.status_poll_interval(),
            )),
        };
        self.route = route;
        self.panel.reload()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CsrfToken(res) => {
                match res {
                    Ok(token) => self.session.set_csrf_token(token),
                    Err(e) => tracing::error!("Failed to open a session with the gateway: {}", e),
                }
                Task::none()
            }
            Message::View(view::Message::Navigate(path)) => {
                self.navigate(Route::from_path(&path))
            }
            msg => {
                let task = self.panel.update(&self.session, msg);
                // A panel asking for a redirect is replaced before it is ever drawn again.
                if let Some(url) = self.panel.redirect().map(str::to_string) {
                    Task::batch(vec![task, self.navigate(Route::Status(url))])
                } else {
                    task
                }
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        self.panel.view(&self.session).map(Message::View)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        self.panel.subscription()
    }
}

fn deposit_form(
    config: &Config,
    backend: &Arc<dyn GatewayBackend + Sync + Send>,
    converter: &Arc<dyn ReceiveAmount + Send + Sync>,
) -> Box<dyn State> {
    let form = DepositForm::new(
        config.min_amount,
        converter.clone(),
        Box::new(Transaction::new(backend.clone())),
    );
    if config.receive_amount_from_gateway {
        Box::new(form.with_gateway_quotes(backend.clone()))
    } else {
        Box::new(form)
    }
}
