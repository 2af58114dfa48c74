use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

/// Command line options
#[derive(Debug, Parser)]
#[command(name = "negative-timer")]
#[command(about = "Countdown timer that keeps counting past zero up to a negative limit")]
pub struct Cli {
    /// Path to the six-line timer configuration file
    #[arg(short, long, default_value = "config.txt")]
    pub config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerConfig {
    /// Countdown start, in seconds
    pub start_seconds: u32,

    /// How far below zero the timer runs before stopping, in seconds
    pub limit_seconds: u32,

    /// Sound played when the display reaches 00:00
    pub zero_sound: Option<PathBuf>,

    /// Sound played when the limit is reached
    pub limit_sound: Option<PathBuf>,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            start_seconds: 10,
            limit_seconds: 10,
            zero_sound: None,
            limit_sound: None,
        }
    }
}

impl TimerConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        Ok(Self::parse(&content))
    }

    /// Parse the positional format: start minutes, start seconds, limit
    /// minutes, limit seconds, zero sound, limit sound. Text after `#` is a
    /// comment and blank lines are skipped.
    pub fn parse(content: &str) -> Self {
        let mut lines = content.lines().filter_map(clean_line);
        let mut next = || lines.next().unwrap_or("");

        let start_minutes = parse_number(next());
        let start_seconds = parse_number(next());
        let limit_minutes = parse_number(next());
        let limit_seconds = parse_number(next());
        let zero_sound = parse_path(next());
        let limit_sound = parse_path(next());

        Self {
            start_seconds: total_seconds(start_minutes, start_seconds),
            limit_seconds: total_seconds(limit_minutes, limit_seconds),
            zero_sound,
            limit_sound,
        }
    }
}

fn clean_line(line: &str) -> Option<&str> {
    let line = line.split('#').next().unwrap_or("").trim();
    if line.is_empty() {
        None
    } else {
        Some(line)
    }
}

// Unparseable values count as zero.
fn parse_number(value: &str) -> i32 {
    value.parse().unwrap_or(0)
}

fn parse_path(value: &str) -> Option<PathBuf> {
    if value.is_empty() {
        None
    } else {
        Some(PathBuf::from(value))
    }
}

fn total_seconds(minutes: i32, seconds: i32) -> u32 {
    let total = i64::from(minutes) * 60 + i64::from(seconds);
    total.clamp(0, i64::from(u32::MAX)) as u32
}
