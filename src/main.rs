reexport!(testing, test);
reexport!(error);
reexport!(config);
reexport!(sql);
reexport!(sheets);
reexport!(autocomplete);
reexport!(editor);
reexport!(query);
reexport!(shell);
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn};

use tokio::io::{AsyncBufReadExt as _, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    let (tx, mut rx) = mpsc::unbounded_channel::<QueryRequest>();
    tokio::spawn(async move {
        while let Some(request) = rx.recv().await {
            info!(
                text = %request.text,
                limit = request.limit,
                page = request.page,
                "query dispatched"
            );
        }
    });

    let mut session = QuerySessionController::builder()
        .surface(BufferSurface::new())
        .config(&config)
        .sheet_name(&config.sheet)
        .executor(tx)
        .messages(LogMessages)
        .build()?;
    session.on_sheets_changed(&SheetRegistry::from_iter([(
        config.sheet.clone(),
        Vec::<String>::new(),
    )]));
    session.enable();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let outcome = line
            .parse::<Directive>()
            .and_then(|directive| directive.apply(&mut session));
        match outcome {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => warn!("{e}"),
        }
        // let the dispatch logger catch up before reading the next line
        tokio::task::yield_now().await;
    }
    Ok(())
}

#[macro_export]
macro_rules! reexport {
    ($module:ident) => {
        $crate::reexport!($module, false);
    };
    ($module:ident, test) => {
        $crate::reexport!($module, true);
    };
    ($module:ident, $is_test:literal) => {
        #[cfg_attr($is_test, cfg(test))]
        mod $module;
        #[cfg_attr($is_test, cfg(test))]
        #[allow(unused_imports)]
        #[allow(ambiguous_glob_reexports)]
        pub use $module::*;
    };
}
