use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::engine::Street;
use crate::seat::Action;

/// Records a single action during a hand: who acted, on which street, and
/// what they did.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub seat: usize,
    pub street: Street,
    pub action: Action,
}

/// Complete record of one hand, serialized to JSONL for offline analysis
/// of training runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Hand identifier (engine hand counter, or logger-issued id)
    pub hand_id: String,
    /// RNG seed in effect, when one was pinned (enables exact replay)
    pub seed: Option<u64>,
    /// Chronological player actions
    pub actions: Vec<ActionRecord>,
    /// Community cards dealt
    pub board: Vec<Card>,
    /// Chip delta per seat over the hand, blinds included
    pub net_chips: Vec<i64>,
    /// Per-seat terminal rewards in big blinds
    pub rewards: Vec<f64>,
    /// Seats that finished the hand with a net chip gain
    pub winners: Vec<usize>,
    /// Timestamp (RFC3339); injected at write time when missing
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes [`HandRecord`]s as one JSON object per line.
pub struct HandLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: "19700101".to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
