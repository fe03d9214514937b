use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{error, info, warn};
use parking_lot::deadlock;
use tokio::runtime::Builder;
use tokio::sync::watch;
use torrent_artifacts::agent::agent::{agent_lifecycle_channel, spawn_agent_lifecycle_listener};
use torrent_artifacts::agent::enums::agent_lifecycle_event::AgentLifecycleEvent;
use torrent_artifacts::agent::structs::agent_configuration::AgentConfiguration;
use torrent_artifacts::agent::structs::current_build_tracker::CurrentBuildTracker;
use torrent_artifacts::agent::structs::json_rpc_channel_factory::JsonRpcChannelFactory;
use torrent_artifacts::common::common::setup_logging;
use torrent_artifacts::config::structs::configuration::Configuration;
use torrent_artifacts::structs::Cli;
use torrent_artifacts::tracker::structs::embedded_tracker::EmbeddedTracker;
use torrent_artifacts::tracker::structs::local_port_allocator::LocalPortAllocator;
use torrent_artifacts::tracker::structs::torrent_tracker_manager::TorrentTrackerManager;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let builds = Arc::new(CurrentBuildTracker::new());
            let settings = Arc::new(AgentConfiguration::from_config(
                &config.agent,
                builds.clone(),
                Arc::new(JsonRpcChannelFactory)
            ));

            if args.print_settings {
                settings.on_configuration_loaded(config.agent.server_url());
                match serde_json::to_string_pretty(&settings.snapshot().await) {
                    Ok(json) => println!("{}", json),
                    Err(error) => {
                        error!("[BOOT] Unable to serialize settings: {}", error);
                        exit(1);
                    }
                }
                return Ok(());
            }

            // ConfigurationLoaded goes out before any build event can be sent.
            let (events, events_receiver) = agent_lifecycle_channel();
            let listener = spawn_agent_lifecycle_listener(settings.clone(), builds.clone(), events_receiver);
            if events.send(AgentLifecycleEvent::ConfigurationLoaded {
                server_url: config.agent.server_url().map(String::from)
            }).is_err() {
                warn!("[BOOT] Lifecycle listener is not running");
            }

            let (shutdown, mut deadlocks_shutdown) = watch::channel(false);
            tokio::spawn(async move {
                info!("[BOOT] Starting thread for deadlocks...");
                let mut interval = tokio::time::interval(Duration::from_secs(30));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let deadlocks = deadlock::check_deadlock();
                            if !deadlocks.is_empty() {
                                info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                                for (i, threads) in deadlocks.iter().enumerate() {
                                    info!("[DEADLOCK] #{i}");
                                    for t in threads {
                                        info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                        info!("[DEADLOCK] {:#?}", t.backtrace());
                                    }
                                }
                            }
                        }
                        _ = deadlocks_shutdown.changed() => {
                            info!("[BOOT] Shutting down thread for deadlocks...");
                            return;
                        }
                    }
                }
            });

            let manager = if config.tracker.enabled {
                let backend = Arc::new(EmbeddedTracker::new(Arc::new(config.tracker.clone())));
                let manager = TorrentTrackerManager::from_config(&config.tracker, backend, Arc::new(LocalPortAllocator));
                // Failures are logged by the manager.
                let _ = manager.start(&config.tracker.server_root_url).await;
                Some(manager)
            } else {
                info!("[BOOT] Torrent tracker disabled");
                None
            };

            if let Err(error) = tokio::signal::ctrl_c().await {
                error!("[BOOT] Unable to listen for shutdown signal: {}", error);
            }
            info!("Shutdown request received, shutting down...");

            if let Some(manager) = manager {
                manager.stop().await;
            }
            let _ = shutdown.send(true);
            drop(events);
            let _ = listener.await;

            info!("Server shutting down completed");
            Ok(())
        })
}
