use crossbeam_channel::{Receiver, TryRecvError};
use std::path::Path;
use wafmap::{
    core::config::CONFIG_FILE_NAME,
    data::{load_collection, source_for},
    ui::{DescriptionPanel, MapWidget},
    FeatureCollection, MapConfig,
};

/// Desktop viewer for the West African electricity-access map
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = MapConfig::load_or_default(Path::new(CONFIG_FILE_NAME))?;
    let runtime = tokio::runtime::Handle::current();

    let (tx, rx) = crossbeam_channel::bounded(1);
    let source = source_for(&config.data.source);
    runtime.spawn(async move {
        let result = load_collection(source.as_ref()).await;
        if tx.send(result).is_err() {
            log::debug!("viewer closed before the data arrived");
        }
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("Electricity access in West Africa"),
        ..Default::default()
    };

    eframe::run_native(
        "wafmap-app",
        options,
        Box::new(move |_cc| Box::new(WafMapApp::new(&config, runtime, rx))),
    )
    .map_err(|e| anyhow::anyhow!("viewer failed: {}", e))?;

    Ok(())
}

struct WafMapApp {
    map: MapWidget,
    description: DescriptionPanel,
    incoming: Option<Receiver<wafmap::Result<FeatureCollection>>>,
}

impl WafMapApp {
    fn new(
        config: &MapConfig,
        runtime: tokio::runtime::Handle,
        incoming: Receiver<wafmap::Result<FeatureCollection>>,
    ) -> Self {
        Self {
            map: MapWidget::new(config, Some(runtime)),
            description: DescriptionPanel::new(),
            incoming: Some(incoming),
        }
    }

    fn poll_data(&mut self, ctx: &egui::Context) {
        let Some(rx) = &self.incoming else {
            return;
        };
        match rx.try_recv() {
            Ok(Ok(collection)) => {
                self.map.load(collection);
                self.incoming = None;
            }
            Ok(Err(err)) => {
                self.map.set_load_error(err.to_string());
                self.incoming = None;
            }
            Err(TryRecvError::Empty) => {
                ctx.request_repaint_after(std::time::Duration::from_millis(100));
            }
            Err(TryRecvError::Disconnected) => {
                self.map.set_load_error("data loader stopped unexpectedly");
                self.incoming = None;
            }
        }
    }
}

impl eframe::App for WafMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_data(ctx);
        self.description.show(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                self.map.show(ui);
            });
    }
}
