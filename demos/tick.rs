use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing_subscriber::EnvFilter;

use eventvisor::{
    Config, EventRegistry, HandlerFn, HandlerSpec, LogWriter, PanicPolicy, Priority,
};

#[derive(Debug, Clone, Copy)]
struct Tick(u64);

#[derive(Debug)]
struct Shared(Arc<i32>);

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut cfg = Config::default();
    cfg.panic_policy = PanicPolicy::Isolate;
    let registry = EventRegistry::new(cfg);

    let total = Arc::new(AtomicU64::new(0));
    let sum = Arc::clone(&total);

    let ids = registry.register([
        HandlerSpec::<Tick>::new(
            HandlerFn::arc("print", |t: &Tick| println!("tick {}", t.0)),
            Priority::Default,
        ),
        HandlerSpec::<Tick>::new(
            HandlerFn::arc("sum", move |t: &Tick| {
                sum.fetch_add(t.0, Ordering::Relaxed);
            }),
            Priority::Important,
        ),
        HandlerSpec::<Tick>::new(Arc::new(LogWriter), Priority::VeryImportant),
    ])?;

    registry.register([HandlerSpec::from_fn(
        |s: &Shared| println!("shared {}", s.0),
        Priority::Default,
    )])?;

    registry.emit(&Tick(5))?;
    registry.emit(&Shared(Arc::new(32)))?;

    registry.unregister_handler::<Tick>(ids[0])?;
    registry.emit(&Tick(7))?;

    registry.unregister_category::<Tick>();
    let emission = registry.emit(&Tick(9))?;

    println!(
        "total={} last_emit_invoked={}",
        total.load(Ordering::Relaxed),
        emission.invoked
    );
    Ok(())
}
