//! Scene scripts and the menu table
//!
//! Every scene is a static step table. Nothing here runs anything; the
//! sequencer in [`crate::runtime`] plays them back.

pub mod content;

use crate::types::{Finish, SceneId, Script, SideEffect, Step};
use std::time::Duration;

use content::audit;

const fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Maps a menu token to the scene it starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuOption {
    pub token: &'static str,
    pub scene: SceneId,
}

pub const MENU_OPTIONS: &[MenuOption] = &[
    MenuOption { token: "1", scene: SceneId::Surveillance },
    MenuOption { token: "2", scene: SceneId::Tracker },
    MenuOption { token: "3", scene: SceneId::Diagnostics },
    MenuOption { token: "4", scene: SceneId::DataTransfer },
    MenuOption { token: "5", scene: SceneId::CommMatrix },
    MenuOption { token: "6", scene: SceneId::SensorReadings },
    MenuOption { token: "7", scene: SceneId::Exit },
];

/// Look up a menu token. Surrounding whitespace is ignored.
pub fn menu_lookup(token: &str) -> Option<SceneId> {
    let token = token.trim();
    MENU_OPTIONS
        .iter()
        .find(|option| option.token == token)
        .map(|option| option.scene)
}

pub fn script(id: SceneId) -> Script {
    let (steps, finish) = match id {
        SceneId::Login => (LOGIN, Finish::Menu),
        SceneId::Surveillance => (SURVEILLANCE, Finish::Pause),
        SceneId::Tracker => (TRACKER, Finish::Pause),
        SceneId::Diagnostics => (DIAGNOSTICS, Finish::Pause),
        SceneId::DataTransfer => (DATA_TRANSFER, Finish::Pause),
        SceneId::CommMatrix => (COMM_MATRIX, Finish::Pause),
        SceneId::SensorReadings => (SENSOR_READINGS, Finish::Pause),
        SceneId::Exit => (EXIT, Finish::Exit),
    };
    Script { id, steps, finish }
}

pub fn all_scripts() -> impl Iterator<Item = Script> {
    SceneId::ALL.into_iter().map(script)
}

const LOGIN: &[Step] = &[
    Step::WriteLine(content::LOGIN_BANNER[0]),
    Step::WriteLine(content::LOGIN_BANNER[1]),
    Step::WriteLine(content::LOGIN_BANNER[2]),
    Step::WriteLine(content::LOGIN_BANNER[3]),
    Step::WriteLine(content::LOGIN_BANNER[4]),
    Step::WriteLine(content::LOGIN_BANNER[5]),
    Step::Reveal("Connection established."),
    Step::Reveal("Verifying user credentials..."),
    Step::Reveal("ACCESS GRANTED. Welcome."),
    Step::Effect(SideEffect::RecordAudit(audit::ACCESS_GRANTED)),
    Step::Delay(ms(1000)),
];

const SURVEILLANCE: &[Step] = &[
    Step::Effect(SideEffect::RecordAudit(audit::VIEWED_SURVEILLANCE)),
    Step::Reveal("                                   Retrieving files from Sector 11..."),
    Step::WriteLine(""),
    Step::Effect(SideEffect::WriteAuditLog),
    Step::Reveal("                                   Log file opened. Press ENTER to return."),
];

const TRACKER: &[Step] = &[
    Step::Reveal("                                Initiating Demogorgon signature scan..."),
    Step::Reveal("                                Scanning for bio-signatures..."),
    Step::WriteLine(""),
    Step::Reveal("                                ** SCANNING COMPLETE **"),
    Step::Reveal("                                No signature detected. Return to menu."),
    Step::Delay(ms(1500)),
];

const DIAGNOSTICS: &[Step] = &[
    Step::Reveal("                                        Running Diagnostic Check:"),
    Step::WriteLine(""),
    Step::Reveal("                                      OS Name: Windows 10 Pro (JRL Custom Build)"),
    Step::Reveal("                                      System Manufacturer: JRL Mainframe"),
    Step::Reveal("                                      Total Memory: 65536MB"),
    Step::Reveal("                                      All critical systems nominal. Press ENTER to return."),
];

const DATA_TRANSFER: &[Step] = &[
    Step::Effect(SideEffect::RecordAudit(audit::DATA_TRANSFER)),
    Step::Reveal("                                   SECURE DATA PACKET TRANSFER PROTOCOL INITIATED."),
    Step::Reveal("                                   [STATUS: 0%]"),
    Step::Delay(ms(1000)),
    Step::Reveal("                                   [STATUS: 35%] - Encrypting metadata..."),
    Step::Delay(ms(2000)),
    Step::Reveal("                                   [STATUS: 78%] - Transfer buffer secure..."),
    Step::Delay(ms(2000)),
    Step::Reveal("                                   [STATUS: 100%] - Transfer Complete. Data Integrity Check: OK."),
    Step::Effect(SideEffect::ExportReport),
    Step::Reveal("                                   Report saved to local system. Press ENTER to return."),
];

const COMM_MATRIX: &[Step] = &[
    Step::Effect(SideEffect::RecordAudit(audit::COMM_MATRIX)),
    Step::Reveal("                                   EXTERNAL COMMUNICATIONS LOG - ENCRYPTED"),
    Step::Reveal("                                   ======================================"),
    Step::Reveal("                                   [01:15 IST] INTERCEPT: Signal Type F-6. Bandwidth: 443MHz."),
    Step::Reveal("                                   CONTENT: Repeating sequence of \"R U S S I A\" then static."),
    Step::Reveal("                                   [01:17 IST] INTERCEPT: Signal Type G-3. Bandwidth: Unknown."),
    Step::Reveal("                                   CONTENT: Cryptic string: 01010111 01001001 01001100 01001100"),
    Step::Reveal("                                   [01:25 IST] INTERCEPT: Signal Type F-6. Bandwidth: 443MHz."),
    Step::Reveal("                                   CONTENT: Repeating sequence of \"T R A V E L L E R\""),
    Step::Reveal("                                   End of Log. Press ENTER to return."),
];

const SENSOR_READINGS: &[Step] = &[
    Step::Effect(SideEffect::RecordAudit(audit::SENSOR_READINGS)),
    Step::Reveal("                                   ENVIRONMENTAL SENSOR READINGS - REAL TIME"),
    Step::Reveal("                                   ========================================="),
    Step::Reveal("                                   [TEMP]: 20.3 C (Normal) | [GRAVITY]: 9.807 m/s^2 (Normal)"),
    Step::Delay(ms(1000)),
    Step::Reveal("                                   [EMF]: 1.2 uT (Stable) | [ATMOS]: 101.3 kPa (Stable)"),
    Step::Delay(ms(1000)),
    Step::Reveal("                                   Anomaly Proximity Alert: PING 1/3: Trace magnetic activity detected."),
    Step::Delay(ms(1500)),
    Step::Reveal("                                   Anomaly Proximity Alert: PING 2/3: Localized temporal distortion spike (0.01 sec)."),
    Step::Delay(ms(1500)),
    Step::Reveal("                                   Anomaly Proximity Alert: PING 3/3: ** HIGH ENERGY SIGNATURE DETECTED. CLOSING RIFT **"),
    Step::Reveal("                                   STATUS: Systems offline. Manual intervention required. Press ENTER to return."),
];

const EXIT: &[Step] = &[
    Step::Reveal("                                 Disconnecting from JRL Network..."),
    Step::Reveal("                                  System Shutdown Complete."),
];
