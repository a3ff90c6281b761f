/*
 * Responsibility
 * - Single assembly point: Router -> App(Router) -> start()
 * - If start() fails nothing else is built
 */
use crate::application::{App, Application};
use crate::config::{Config, EngineMode};
use crate::error::AppError;
use crate::router::HttpRouter;

/// Build a ready-to-run application from the process environment.
pub fn build_application() -> Result<App<HttpRouter>, AppError> {
    let config = Config::from_env()?;
    build_application_with(&config)
}

pub fn build_application_with(config: &Config) -> Result<App<HttpRouter>, AppError> {
    assemble(config.mode, |router| App::new(router, config.addr))
}

/// Router first, then the application around it, then its start hook.
pub fn assemble<A, F>(mode: EngineMode, make_app: F) -> Result<A, AppError>
where
    A: Application,
    F: FnOnce(HttpRouter) -> A,
{
    let router = HttpRouter::new(mode);
    let mut app = make_app(router);

    app.start()?;

    Ok(app)
}
