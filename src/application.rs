/*
 * Responsibility
 * - Application lifecycle: Constructed -> Started -> Running
 * - start(): initialisation hook (connections, warmups, ...). Nothing to do yet.
 * - run(): hand the router to the server; consumes the application
 */
use std::future::Future;
use std::net::SocketAddr;

use async_trait::async_trait;
use tokio::net::TcpListener;

use crate::error::AppError;
use crate::router::Serve;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Constructed,
    Started,
    Running,
}

#[async_trait]
pub trait Application: Send + Sized + 'static {
    fn start(&mut self) -> Result<(), AppError>;

    /// Serve until the process is terminated. Errors are fatal.
    async fn run(self) -> Result<(), AppError>;
}

#[derive(Debug)]
pub struct App<R> {
    router: R,
    addr: SocketAddr,
    lifecycle: Lifecycle,
}

impl<R: Serve> App<R> {
    pub fn new(router: R, addr: SocketAddr) -> Self {
        Self {
            router,
            addr,
            lifecycle: Lifecycle::Constructed,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Bind the configured address and serve until `signal` resolves.
    pub async fn run_until<F>(self, signal: F) -> Result<(), AppError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = crate::router::bind(self.addr).await?;
        self.run_on_until(listener, signal).await
    }

    /// Serve on a listener the caller already bound (e.g. port 0).
    pub async fn run_on(self, listener: TcpListener) -> Result<(), AppError> {
        self.run_on_until(listener, std::future::pending()).await
    }

    pub async fn run_on_until<F>(mut self, listener: TcpListener, signal: F) -> Result<(), AppError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if self.lifecycle == Lifecycle::Constructed {
            tracing::warn!("running an application that was never started");
        }
        self.lifecycle = Lifecycle::Running;
        tracing::debug!(lifecycle = ?self.lifecycle, "application running");

        self.router.serve_with_shutdown(listener, signal).await?;
        Ok(())
    }
}

#[async_trait]
impl<R: Serve> Application for App<R> {
    fn start(&mut self) -> Result<(), AppError> {
        match self.lifecycle {
            Lifecycle::Constructed => {
                self.lifecycle = Lifecycle::Started;
                tracing::debug!(addr = %self.addr, "application started");
            }
            Lifecycle::Started | Lifecycle::Running => {
                tracing::debug!(lifecycle = ?self.lifecycle, "start called again, ignoring");
            }
        }
        Ok(())
    }

    async fn run(self) -> Result<(), AppError> {
        self.run_until(std::future::pending()).await
    }
}
