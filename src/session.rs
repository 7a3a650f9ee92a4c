//! Session state machine
//!
//! Owns the current [`Mode`], the audit log and the display driver, and
//! decides what each Enter keypress does. Routing is split out into the
//! pure [`dispatch`] function; [`Session`] carries out the result.
//!
//! ```text
//! Login --boot--> Menu --"1".."6"--> Pause --Enter--> Menu
//!                  |  \--"7"--> Exited
//!                  \--other--> Menu (invalid selection)
//! ```

use crate::config::TerminalConfig;
use crate::display::{DisplayDriver, Surface};
use crate::error::TerminalError;
use crate::export::Exporter;
use crate::runtime::{self, SceneContext};
use crate::scenes::{self, content};
use crate::types::{AuditLog, Event, Finish, Mode, Prompt, SceneId};
use tokio::time::Instant;

/// What an Enter keypress should do, given the current mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Clear the screen and play a scene
    Run(SceneId),
    /// Unknown menu token: show the message and re-render the menu
    Invalid,
    /// Leave the pause screen
    ShowMenu,
    /// Enter has no meaning in this mode
    Ignore,
}

pub fn dispatch(mode: Mode, token: &str) -> Dispatch {
    match mode {
        Mode::Menu => scenes::menu_lookup(token).map_or(Dispatch::Invalid, Dispatch::Run),
        Mode::Pause => Dispatch::ShowMenu,
        Mode::Login | Mode::Exited => Dispatch::Ignore,
    }
}

/// Record of one handled Enter (or of booting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Mode,
    pub to: Mode,
    /// Scene that ran, if any
    pub scene: Option<SceneId>,
}

pub struct Session<S: Surface> {
    mode: Mode,
    audit: AuditLog,
    driver: DisplayDriver<S>,
    exporter: Box<dyn Exporter>,
    delay_scale: f32,
    /// When input was last re-opened; anything typed before is stale
    input_opened_at: Option<Instant>,
}

impl<S: Surface> Session<S> {
    pub fn new(surface: S, exporter: Box<dyn Exporter>) -> Self {
        Self::with_config(surface, exporter, &TerminalConfig::default())
    }

    pub fn with_config(surface: S, exporter: Box<dyn Exporter>, config: &TerminalConfig) -> Self {
        Self {
            mode: Mode::Login,
            audit: AuditLog::new(),
            driver: DisplayDriver::with_interval(surface, config.char_interval()),
            exporter,
            delay_scale: config.delay_scale,
            input_opened_at: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn audit(&self) -> &AuditLog {
        &self.audit
    }

    pub fn surface(&self) -> &S {
        self.driver.surface()
    }

    pub fn surface_mut(&mut self) -> &mut S {
        self.driver.surface_mut()
    }

    pub fn into_surface(self) -> S {
        self.driver.into_surface()
    }

    /// Whether keystrokes are currently taken
    pub fn accepts_input(&self) -> bool {
        !self.mode.is_terminal() && self.mode != Mode::Login && self.surface().input().is_enabled()
    }

    /// Play the login scene and land on the menu
    ///
    /// Does nothing once the session has left `Login`.
    pub async fn boot(&mut self) -> Result<Option<Transition>, TerminalError> {
        if self.mode != Mode::Login {
            return Ok(None);
        }
        let to = self.run_scene(SceneId::Login).await?;
        Ok(Some(self.transition(Mode::Login, to, Some(SceneId::Login))))
    }

    /// Handle one input event
    ///
    /// Returns a [`Transition`] for every Enter that did something.
    pub async fn handle(&mut self, event: Event) -> Result<Option<Transition>, TerminalError> {
        if !self.accepts_input() {
            log::trace!("[Session] dropped {:?} in {:?}", event, self.mode);
            self.scroll_after(&event)?;
            return Ok(None);
        }

        match event {
            Event::Key(ch) => {
                self.surface_mut().input_mut().push(ch);
                Ok(None)
            }
            Event::Backspace => {
                self.surface_mut().input_mut().backspace();
                Ok(None)
            }
            Event::Enter => {
                let token = self.surface_mut().input_mut().submit();
                let transition = self.enter(&token).await?;
                self.driver.scroll_to_bottom()?;
                Ok(transition)
            }
        }
    }

    /// Handle an event stamped with when it was typed
    ///
    /// Events typed before input was last re-opened (i.e. while a scene
    /// was playing) are dropped.
    pub async fn handle_at(
        &mut self,
        event: Event,
        typed_at: Instant,
    ) -> Result<Option<Transition>, TerminalError> {
        match self.input_opened_at {
            Some(opened) if typed_at >= opened => self.handle(event).await,
            _ => {
                log::trace!("[Session] dropped stale {:?}", event);
                self.scroll_after(&event)?;
                Ok(None)
            }
        }
    }

    /// Type a whole line and press Enter
    pub async fn submit(&mut self, line: &str) -> Result<Option<Transition>, TerminalError> {
        let mut last = None;
        for event in Event::line(line) {
            if let Some(transition) = self.handle(event).await? {
                last = Some(transition);
            }
        }
        Ok(last)
    }

    async fn enter(&mut self, token: &str) -> Result<Option<Transition>, TerminalError> {
        let from = self.mode;
        match dispatch(from, token) {
            Dispatch::Run(scene) => {
                self.driver.clear()?;
                let to = self.run_scene(scene).await?;
                Ok(Some(self.transition(from, to, Some(scene))))
            }
            Dispatch::Invalid => {
                log::debug!("[Session] invalid selection {token:?}");
                self.close_input();
                self.driver.reveal(content::INVALID_SELECTION).await?;
                self.show_menu()?;
                Ok(Some(self.transition(from, Mode::Menu, None)))
            }
            Dispatch::ShowMenu => {
                self.show_menu()?;
                Ok(Some(self.transition(from, Mode::Menu, None)))
            }
            Dispatch::Ignore => Ok(None),
        }
    }

    async fn run_scene(&mut self, scene: SceneId) -> Result<Mode, TerminalError> {
        self.close_input();

        let script = scenes::script(scene);
        let finish = {
            let mut ctx = SceneContext {
                driver: &mut self.driver,
                audit: &mut self.audit,
                exporter: &*self.exporter,
                delay_scale: self.delay_scale,
            };
            runtime::play(&script, &mut ctx).await?
        };

        match finish {
            Finish::Menu => self.show_menu()?,
            Finish::Pause => {
                self.mode = Mode::Pause;
                self.driver.surface_mut().set_prompt(Prompt::Busy)?;
                self.open_input();
            }
            Finish::Exit => {
                self.mode = Mode::Exited;
                self.driver.surface_mut().set_prompt(Prompt::Hidden)?;
                self.close_input();
            }
        }
        Ok(self.mode)
    }

    fn show_menu(&mut self) -> Result<(), TerminalError> {
        self.driver.clear()?;
        for line in content::MENU_SCREEN {
            self.driver.write_line(line)?;
        }
        self.driver.surface_mut().set_prompt(Prompt::Admin)?;
        self.mode = Mode::Menu;
        self.open_input();
        Ok(())
    }

    /// Every Enter ends with the view at the bottom, even an ignored one
    fn scroll_after(&mut self, event: &Event) -> Result<(), TerminalError> {
        if matches!(event, Event::Enter) {
            self.driver.scroll_to_bottom()?;
        }
        Ok(())
    }

    fn open_input(&mut self) {
        self.driver.surface_mut().input_mut().set_enabled(true);
        self.input_opened_at = Some(Instant::now());
    }

    fn close_input(&mut self) {
        self.driver.surface_mut().input_mut().set_enabled(false);
    }

    fn transition(&self, from: Mode, to: Mode, scene: Option<SceneId>) -> Transition {
        log::info!("[Session] {from:?} -> {to:?}");
        Transition { from, to, scene }
    }
}
