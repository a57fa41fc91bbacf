use crate::core::loader::DatasetLoader;
use crate::core::prompt::{separator, FilterPrompt};
use crate::core::reporters::default_reporters;
use crate::domain::model::{FilterSelection, TripTable};
use crate::domain::ports::{ConfigProvider, Reporter};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use std::io::{BufRead, Write};
use std::time::Instant;

pub struct Session<C: ConfigProvider> {
    loader: DatasetLoader<C>,
    reporters: Vec<Box<dyn Reporter>>,
    monitor: SystemMonitor,
}

impl<C: ConfigProvider> Session<C> {
    pub fn new(config: C) -> Self {
        Self::with_reporters(config, default_reporters())
    }

    pub fn with_reporters(config: C, reporters: Vec<Box<dyn Reporter>>) -> Self {
        let monitor = SystemMonitor::new(config.monitor_enabled());
        Self {
            loader: DatasetLoader::new(config),
            reporters,
            monitor,
        }
    }

    /// 問條件、載入、輸出報表，直到使用者不回答 "yes"。回傳執行的輪數
    pub fn run<R: BufRead, W: Write>(&self, prompt: &mut FilterPrompt<R, W>) -> Result<usize> {
        let mut iterations = 0;

        loop {
            let selection = prompt.get_filters()?;
            iterations += 1;
            tracing::info!(
                "🔍 Iteration {}: city={}, month={:?}, day={:?}",
                iterations,
                selection.city,
                selection.month,
                selection.day
            );

            self.report(&selection, prompt.output())?;

            if !prompt.ask_restart()? {
                break;
            }
        }

        if self.monitor.is_enabled() {
            self.monitor.log_final_stats();
        }
        Ok(iterations)
    }

    pub fn report<W: Write>(&self, selection: &FilterSelection, out: &mut W) -> Result<()> {
        let table = self.loader.load(selection)?;
        self.monitor.log_stats("load");

        for reporter in &self.reporters {
            write_section(reporter.as_ref(), &table, out)?;
            self.monitor.log_stats(reporter.name());
        }
        Ok(())
    }
}

fn write_section<W: Write>(reporter: &dyn Reporter, table: &TripTable, out: &mut W) -> Result<()> {
    writeln!(out, "\n{}\n", reporter.heading())?;
    let start = Instant::now();

    reporter.write_report(table, out)?;

    writeln!(out, "\nThis took {} seconds.", start.elapsed().as_secs_f64())?;
    writeln!(out, "{}", separator())?;
    out.flush()?;
    Ok(())
}
