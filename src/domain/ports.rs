use crate::domain::model::{City, TripTable};
use crate::utils::error::Result;
use std::io::Write;
use std::path::{Path, PathBuf};

pub trait ConfigProvider {
    fn data_dir(&self) -> &Path;
    fn city_file(&self, city: City) -> &str;
    fn monitor_enabled(&self) -> bool;

    fn dataset_path(&self, city: City) -> PathBuf {
        self.data_dir().join(self.city_file(city))
    }
}

/// 報表區段：標題、計時與分隔線由 session 負責，這裡只寫結果行
pub trait Reporter {
    fn name(&self) -> &'static str;
    fn heading(&self) -> &'static str;
    fn write_report(&self, table: &TripTable, out: &mut dyn Write) -> Result<()>;
}
