use crate::clients::{
    AdminClients, ArticleClient, CommunityPostClient, DoctorClient, EventClient, FeedbackClient,
    GameProgressClient, KidClient, UserClient,
};
use crate::config::AppConfig;
use crate::error::AdminError;
use luma_api::{ApiEntity, HealthActor, HttpTransport, ResourceActor, ResourceClient};
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Runtime wiring for the admin core.
///
/// `AdminSystem` is responsible for:
/// - **Lifecycle Management**: spawning one gateway actor per REST collection plus
///   the health actor, and stopping them again
/// - **Client Distribution**: handing out [`AdminClients`] to the engine and pages
///
/// All actors share one [`HttpTransport`] (and so one connection pool and request
/// timeout).
///
/// # Example
///
/// ```ignore
/// let system = AdminSystem::start(&AppConfig::from_env()?)?;
/// let engine = Arc::new(AggregationEngine::new(system.clients.clone()));
/// // ... mount pages ...
/// drop(engine);
/// system.shutdown().await?;
/// ```
pub struct AdminSystem {
    pub clients: AdminClients,
    handles: Vec<JoinHandle<()>>,
}

impl AdminSystem {
    /// Builds the transport and spawns every actor.
    pub fn start(config: &AppConfig) -> Result<Self, AdminError> {
        let transport = HttpTransport::new(&config.api_url, config.request_timeout)?;
        let buffer = config.channel_buffer;
        let mut handles = Vec::new();

        let (health_actor, health) = HealthActor::new(transport.clone(), buffer);
        handles.push(tokio::spawn(health_actor.run()));

        let clients = AdminClients {
            users: UserClient::new(spawn(&transport, buffer, &mut handles)),
            kids: KidClient::new(spawn(&transport, buffer, &mut handles)),
            doctors: DoctorClient::new(spawn(&transport, buffer, &mut handles)),
            articles: ArticleClient::new(spawn(&transport, buffer, &mut handles)),
            feedback: FeedbackClient::new(spawn(&transport, buffer, &mut handles)),
            events: EventClient::new(spawn(&transport, buffer, &mut handles)),
            game_progress: GameProgressClient::new(spawn(&transport, buffer, &mut handles)),
            community: CommunityPostClient::new(spawn(&transport, buffer, &mut handles)),
            health,
        };

        info!(api_url = %transport.base_url(), actors = handles.len(), "Admin system started");
        Ok(Self { clients, handles })
    }

    /// Drops the system's clients and waits for every actor to exit.
    ///
    /// Actors only stop once *every* clone of their client is gone, so engines and
    /// pages holding clones must be dropped first or this waits for them.
    pub async fn shutdown(self) -> Result<(), AdminError> {
        info!("Shutting down admin system...");
        drop(self.clients);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(AdminError::Shutdown(e.to_string()));
            }
        }

        info!("Admin system shutdown complete.");
        Ok(())
    }
}

fn spawn<T: ApiEntity>(
    transport: &HttpTransport,
    buffer: usize,
    handles: &mut Vec<JoinHandle<()>>,
) -> ResourceClient<T> {
    let (actor, client) = ResourceActor::<T>::new(transport.clone(), buffer);
    handles.push(tokio::spawn(actor.run()));
    client
}
