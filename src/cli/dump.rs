//! Dump scene scripts as JSON
//!
//! Each script carries an md5 fingerprint of its display text, so content
//! changes show up in diffs of the dump even when step counts don't move.

use crate::error::TerminalError;
use crate::scenes;
use crate::types::{Finish, SceneId, Script, Step};
use serde::Serialize;

#[derive(Serialize)]
struct ScriptDump {
    scene: SceneId,
    finish: Finish,
    content_hash: String,
    steps: &'static [Step],
}

impl From<Script> for ScriptDump {
    fn from(script: Script) -> Self {
        Self {
            scene: script.id,
            finish: script.finish,
            content_hash: content_hash(&script),
            steps: script.steps,
        }
    }
}

/// md5 over the text the script displays, one line per step
pub fn content_hash(script: &Script) -> String {
    let mut text = String::new();
    for step in script.steps {
        if let Step::Reveal(line) | Step::WriteLine(line) = step {
            text.push_str(line);
            text.push('\n');
        }
    }
    format!("{:x}", md5::compute(text.as_bytes()))
}

/// Pretty JSON for one scene by name, or for all of them
pub fn dump(scene: Option<&str>) -> Result<String, TerminalError> {
    let dumps: Vec<ScriptDump> = match scene {
        Some(name) => {
            let id = SceneId::from_name(name)
                .ok_or_else(|| TerminalError::UnknownScene(name.to_string()))?;
            vec![scenes::script(id).into()]
        }
        None => scenes::all_scripts().map(ScriptDump::from).collect(),
    };
    Ok(serde_json::to_string_pretty(&dumps)?)
}
