//! Report directory writer.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;
use vf_sim::SimRun;

use crate::report::render_report;
use crate::stamp::ReportStamp;
use crate::{ResultsError, ResultsResult};

#[derive(Clone, Debug)]
pub struct ReportStore {
    root_dir: PathBuf,
}

impl ReportStore {
    pub fn new(root_dir: PathBuf) -> ResultsResult<Self> {
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir).map_err(|source| ResultsError::Write {
                path: root_dir.clone(),
                source,
            })?;
        }
        Ok(Self { root_dir })
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    pub fn report_path(&self, stamp: &ReportStamp) -> PathBuf {
        self.root_dir.join(stamp.file_name())
    }

    /// Write pre-rendered report text. An existing report with the same stamp is replaced.
    pub fn write(&self, stamp: &ReportStamp, contents: &str) -> ResultsResult<PathBuf> {
        let path = self.report_path(stamp);
        fs::write(&path, contents).map_err(|source| ResultsError::Write {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), bytes = contents.len(), "report written");
        Ok(path)
    }

    pub fn save_run(&self, run: &SimRun, stamp: &ReportStamp) -> ResultsResult<PathBuf> {
        self.write(stamp, &render_report(run))
    }

    /// Report file names in this directory, sorted.
    pub fn list_reports(&self) -> ResultsResult<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root_dir)? {
            let name = entry?.file_name().to_string_lossy().to_string();
            if name.starts_with(crate::stamp::REPORT_PREFIX) && name.ends_with(".txt") {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }
}
