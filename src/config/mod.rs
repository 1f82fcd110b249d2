use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::LedgerError;

const TMP_SUFFIX: &str = "tmp";

/// Decides when a shipment's fee counts as delivered value.
///
/// Both policies existed over the life of the business; `CompletedOnly`
/// (payout on the courier-reported completion alone) is the one in force
/// and is the default. `RequireAdminValidation` additionally gates payout
/// on the admin having validated the shipment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentPayoutPolicy {
    #[default]
    CompletedOnly,
    RequireAdminValidation,
}

/// Named monetary and threshold constants driving the reconciliation
/// engine. All amounts are whole XOF.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineConfig {
    /// Flat fuel/overhead charge deducted every day regardless of activity.
    pub fixed_daily_cost: i64,
    /// Default fee applied when an admin assigns a new shipment.
    pub shipment_fee: i64,
    /// Base salary tier when the period's course count exceeds the threshold.
    pub base_salary_high: i64,
    /// Base salary tier otherwise.
    pub base_salary_low: i64,
    /// Flat commission per completed course, paid regardless of eligibility.
    pub commission_per_course: i64,
    /// Course count above which the high base-salary tier applies.
    pub courses_threshold: u32,
    /// Distinct working days required before any base salary is owed.
    pub working_days_for_base_salary: u32,
    #[serde(default)]
    pub shipment_payout: ShipmentPayoutPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fixed_daily_cost: 2000,
            shipment_fee: 1000,
            base_salary_high: 50_000,
            base_salary_low: 25_000,
            commission_per_course: 150,
            courses_threshold: 500,
            working_days_for_base_salary: 25,
            shipment_payout: ShipmentPayoutPolicy::default(),
        }
    }
}

impl EngineConfig {
    /// Loads a configuration from a JSON file, falling back to defaults
    /// when the file does not exist yet.
    pub fn load(path: &Path) -> Result<Self, LedgerError> {
        if path.exists() {
            let data = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), LedgerError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        let tmp = tmp_path(path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Rejects configurations that could silently corrupt the arithmetic.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.fixed_daily_cost < 0
            || self.shipment_fee < 0
            || self.base_salary_high < 0
            || self.base_salary_low < 0
            || self.commission_per_course < 0
        {
            return Err(LedgerError::InvalidInput(
                "configuration amounts must be non-negative".into(),
            ));
        }
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), LedgerError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
