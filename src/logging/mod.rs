use crate::cli::Args;
use crate::logging::quickwit::QuickwitLoggingLayerBuilder;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub mod consts;
pub mod quickwit;

pub fn init(args: &Args) {
    let quickwit_logging_layer = QuickwitLoggingLayerBuilder::new(args.quickwit_url.clone())
        .marker_field("task")
        .map_marker_to_index("http_request", "http_requests")
        .map_marker_to_index("occurrence_search", "occurrence_searches")
        .map_marker_to_index("round_scored", "round_scores")
        .with_batch_size(100)
        .build();
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy()
        .add_directive(
            "linnaeus_server=info"
                .parse()
                .expect("Failed to parse the default log directive."),
        );
    tracing_subscriber::registry()
        .with(quickwit_logging_layer)
        .with(env_filter)
        .with(fmt::layer())
        .init();
}
