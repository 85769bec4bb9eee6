use std::io::{self, Write};

use url::Url;

use crate::{
    checks::{Check, CheckSuccess},
    error::CheckError,
};

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

const SEPARATOR_WIDTH: usize = 60;

#[derive(Debug, Clone)]
pub struct CheckResult {
    pub check: Check,
    pub passed: bool,
    /// Only set by a passing create check, not used for the verdict.
    pub created_id: Option<String>,
}

#[derive(Debug, Default)]
pub struct Report {
    results: Vec<CheckResult>,
}

impl Report {
    pub fn push(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }

    pub fn exit_status(&self) -> u8 {
        if self.all_passed() {
            EXIT_SUCCESS
        } else {
            EXIT_FAILURE
        }
    }
}

/// Human readable console report.
pub struct Reporter<W> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Reporter { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn separator(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", "=".repeat(SEPARATOR_WIDTH))
    }

    pub fn config_error(&mut self, error: &dyn std::error::Error) -> io::Result<()> {
        writeln!(self.out, "❌ {}", error)
    }

    pub fn banner(&mut self, api_url: &Url) -> io::Result<()> {
        self.separator()?;
        writeln!(self.out, "🚀 BACKEND API TESTING SUITE")?;
        self.separator()?;
        writeln!(self.out, "Testing API at: {}", api_url)?;
        writeln!(self.out)
    }

    pub fn check_started(&mut self, check: Check) -> io::Result<()> {
        writeln!(self.out, "🔍 Testing {}...", check.title())
    }

    pub fn check_finished(
        &mut self,
        check: Check,
        outcome: &Result<CheckSuccess, CheckError>,
    ) -> io::Result<()> {
        match outcome {
            Ok(success) => writeln!(self.out, "✅ {}", success.message)?,
            Err(e) => writeln!(self.out, "❌ {} failed: {}", check.title(), e.detail())?,
        }
        writeln!(self.out)
    }

    pub fn summary(&mut self, report: &Report) -> io::Result<()> {
        self.separator()?;
        writeln!(self.out, "📊 TEST SUMMARY")?;
        self.separator()?;
        writeln!(
            self.out,
            "Tests Passed: {}/{}",
            report.passed(),
            report.total()
        )?;
        if report.all_passed() {
            writeln!(self.out, "🎉 ALL TESTS PASSED - Backend is working correctly!")?;
        } else {
            writeln!(self.out, "❌ SOME TESTS FAILED - Backend has issues!")?;
        }
        self.out.flush()
    }
}
