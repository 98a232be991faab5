//! Interactive circle timer.
//!
//! Keys:
//! - `s` / `x` start and stop, `space` toggles
//! - `a` switches between counting down and counting up
//! - `d` edits the duration, `l` edits the limit (seconds, `enter` to apply)
//! - `q` quits

use bubbletea_rs::{quit, Cmd, KeyMsg, Model, Msg, Program};
use circle_timer::prelude::*;
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Duration,
    Limit,
}

struct App {
    timer: CircleTimer,
    editing: Option<(Field, String)>,
    status: String,
}

impl App {
    fn apply_edit(&mut self, field: Field, input: &str) {
        let secs = match input.parse::<i64>() {
            Ok(secs) => secs,
            Err(_) => {
                self.status = format!("not a number: {:?}", input);
                return;
            }
        };
        let millis = secs.saturating_mul(1000);
        let result = match field {
            Field::Duration => self.timer.set_duration(millis),
            Field::Limit => self.timer.set_limit(millis),
        };
        self.status = match result {
            Ok(()) => format!("{:?} set to {}s", field, secs),
            Err(e) => e.to_string(),
        };
    }

    fn handle_edit_key(&mut self, key: &KeyMsg) {
        let Some((field, mut input)) = self.editing.take() else {
            return;
        };
        match key.key {
            KeyCode::Enter => self.apply_edit(field, &input),
            KeyCode::Esc => self.status = "edit cancelled".to_string(),
            KeyCode::Backspace => {
                input.pop();
                self.editing = Some((field, input));
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                input.push(c);
                self.editing = Some((field, input));
            }
            _ => self.editing = Some((field, input)),
        }
    }

    fn handle_key(&mut self, key: &KeyMsg) -> Option<Cmd> {
        if key.key == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(quit());
        }
        if self.editing.is_some() {
            self.handle_edit_key(key);
            return None;
        }

        match key.key {
            KeyCode::Char('q') | KeyCode::Esc => Some(quit()),
            KeyCode::Char('s') => {
                self.status.clear();
                self.timer.start()
            }
            KeyCode::Char('x') => {
                self.timer.stop();
                None
            }
            KeyCode::Char(' ') => Some(self.timer.toggle_cmd()),
            KeyCode::Char('a') => {
                let additive = !self.timer.is_additive();
                self.status = match self.timer.set_additive_mode(additive) {
                    Ok(()) if additive => "counting up".to_string(),
                    Ok(()) => "counting down".to_string(),
                    Err(e) => e.to_string(),
                };
                None
            }
            KeyCode::Char('d') => {
                self.editing = Some((Field::Duration, String::new()));
                None
            }
            KeyCode::Char('l') => {
                self.editing = Some((Field::Limit, String::new()));
                None
            }
            _ => None,
        }
    }
}

impl Model for App {
    fn init() -> (Self, Option<Cmd>) {
        let timer = match circle_timer::new(&[
            with_start_time_in_millis(90_000),
            with_limit_in_millis(120_000),
        ]) {
            Ok(timer) => timer,
            Err(_) => CircleTimer::default(),
        };
        let app = Self {
            timer,
            editing: None,
            status: String::new(),
        };
        (app, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key);
        }
        if let Some(finished) = msg.downcast_ref::<FinishedMsg>() {
            if finished.id == self.timer.id() {
                self.status = "time's up".to_string();
            }
            return None;
        }
        self.timer.update(msg)
    }

    fn view(&self) -> String {
        let help = Style::new().foreground(lipgloss::Color::from("#626262"));
        let state = if self.timer.is_running() { "running" } else { "stopped" };
        let mode = if self.timer.is_additive() { "up" } else { "down" };

        let prompt = match &self.editing {
            Some((field, input)) => format!("{:?} (s): {}_", field, input),
            None => self.status.clone(),
        };

        format!(
            "\n{}\n\n{} · counting {}\n{}\n\n{}\n",
            self.timer.view(),
            state,
            mode,
            prompt,
            help.render("s start · x stop · space toggle · a mode · d duration · l limit · q quit"),
        )
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let program = Program::<App>::builder()
        .alt_screen(true)
        .signal_handler(true)
        .build()?;
    program.run().await?;
    Ok(())
}
