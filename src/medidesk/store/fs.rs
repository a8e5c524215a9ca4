use super::{Record, RecordStore};
use crate::error::{MedideskError, Result};
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// File-backed store: all records of one type live in
/// `<data_dir>/<KIND>.txt`, one delimited line per record.
pub struct FileStore<R: Record> {
    data_dir: PathBuf,
    _record: PhantomData<R>,
}

impl<R: Record> FileStore<R> {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            _record: PhantomData,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn file_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.txt", R::KIND))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).map_err(MedideskError::Io)?;
        }
        Ok(())
    }
}

impl<R: Record> RecordStore<R> for FileStore<R> {
    fn load_all(&self) -> Result<Vec<R>> {
        let path = self.file_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path).map_err(MedideskError::Io)?;
        let mut records = Vec::new();
        for (number, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let record = R::from_line(line).map_err(|reason| MedideskError::Malformed {
                kind: R::KIND,
                line: number + 1,
                reason,
            })?;
            records.push(record);
        }
        Ok(records)
    }

    fn save_all(&mut self, records: &[R]) -> Result<()> {
        self.ensure_dir()?;

        let mut content = String::new();
        for record in records {
            content.push_str(&record.to_line());
            content.push('\n');
        }
        fs::write(self.file_path(), content).map_err(MedideskError::Io)?;
        Ok(())
    }
}
