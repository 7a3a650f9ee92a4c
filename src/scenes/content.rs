//! Fixed text shown by the terminal

/// Banner written at once when the login scene starts
pub const LOGIN_BANNER: &[&str] = &[
    "                                   =================================",
    "                                    J A L A N D H A R   L A B O R A T O R Y",
    "                                       SECURE TERMINAL ACCESS",
    "                                   =================================",
    "",
    "                                      Attempting secure handshake...",
];

pub const MENU_SCREEN: &[&str] = &[
    "",
    "",
    "                                   =================================",
    "                                      J.R.L. MAIN SYSTEM MENU",
    "                                   =================================",
    "",
    "                                   [1] - View Surveillance Logs (Sector 11)",
    "                                   [2] - Initiate Demogorgon Tracker",
    "                                   [3] - Run System Diagnostics",
    "                                   [4] - Initiate Data Packet Transfer (Sector 001)",
    "                                   [5] - Check External Communication Matrix",
    "                                   [6] - View Current Sensor Readings (Anomaly Proximity)",
    "                                   [7] - EXIT TERMINAL",
    "",
];

pub const INVALID_SELECTION: &str = "Invalid selection. Please use 1-7.";

/// Static portion of the surveillance log; audit records are appended after it
pub const SECTOR_11_LOG: &str = "\
JALANDHAR REGIONAL LABORATORY - SECTOR 11 LOG
Date: 1983-11-07 (TUESDAY)
--------------------------------------------------------------------------------
[08:00] ROUTINE: Systems check 100% nominal.
[12:30] REPORT: Localized power fluctuation noted (0.3 seconds). Source undetermined.
[14:15] ANOMALY: Subject 011 recorded unusual distress. Spontaneous mild E.M.I. detected.
[21:05] WARNING: Personnel ID: 749-B (Security Guard J. Scott) failed to report for shift change.
[21:15] ALERT: Gate 03 access panel shows signs of forced entry. Trace amounts of unknown biological substance found.
--------------------------------------------------------------------------------

";

pub const REPORT_FILE_NAME: &str = "JRL_Classified_Report_404B.txt";

pub const CLASSIFIED_REPORT: &str = "CLASSIFIED JRL REPORT 404-B: Unexplained energy fluctuations continue near the old Sector 11 facility. Auditory artifacts were recorded, matching previously documented 'guttural' sounds. Recommend isolating and analyzing all data points related to subject 'Eleven' and the 1983 incident. Do not share this information with external agencies. END OF REPORT.";

pub mod audit {
    pub const ACCESS_GRANTED: &str = "Terminal Access Granted by User";
    pub const VIEWED_SURVEILLANCE: &str = "User viewed Surveillance Logs (Sector 11)";
    pub const DATA_TRANSFER: &str = "User initiated classified data transfer (Sector 001)";
    pub const COMM_MATRIX: &str = "User accessed External Communication Matrix";
    pub const SENSOR_READINGS: &str = "User accessed Anomaly Proximity Sensor Readings";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sector_log_ends_with_blank_line() {
        assert!(SECTOR_11_LOG.starts_with("JALANDHAR REGIONAL LABORATORY - SECTOR 11 LOG\n"));
        assert!(SECTOR_11_LOG.ends_with("-\n\n"));
    }

    #[test]
    fn menu_lists_seven_options() {
        let options = MENU_SCREEN
            .iter()
            .filter(|line| line.trim_start().starts_with('['))
            .count();
        assert_eq!(options, 7);
    }
}
