//! Text menu driving a [`MembershipManager`] session.

pub mod prompts;
pub mod summary;

use anyhow::Result;
use gym_membership_pricing::prelude::*;
use std::io::{BufRead, Write};

use prompts::{ask_confirmation, ask_int, read_line};
use summary::{breakdown_lines, menu_lines, Palette};

pub struct Shell<R, W> {
    manager: MembershipManager,
    input: R,
    output: W,
    palette: Palette,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(manager: MembershipManager, input: R, output: W) -> Self {
        Self {
            manager,
            input,
            output,
            palette: Palette::new(false),
        }
    }

    pub fn with_color(mut self, enabled: bool) -> Self {
        self.palette = Palette::new(enabled);
        self
    }

    pub fn into_manager(self) -> MembershipManager {
        self.manager
    }

    /// Runs the menu until the user asks for the total or exits.
    ///
    /// Returns the quoted total, or [`NO_PLAN_TOTAL`] when the session ends
    /// without one.
    pub fn run(&mut self) -> Result<f64> {
        loop {
            for line in menu_lines(&self.palette) {
                writeln!(self.output, "{}", line)?;
            }

            let Some(choice) = read_line(&mut self.input, &mut self.output, "Option: ")? else {
                tracing::debug!("input closed, leaving menu");
                return Ok(NO_PLAN_TOTAL);
            };

            let outcome = match choice.as_str() {
                "1" => self.select_plan()?,
                "2" => self.add_feature()?,
                "3" => self.set_members()?,
                "4" => return self.show_total(),
                "5" => self.confirm_exit()?,
                _ => {
                    let message = self
                        .palette
                        .error("Invalid option. Please choose a valid menu option");
                    writeln!(self.output, "{}", message)?;
                    Step::Continue
                }
            };

            if let Step::Finish = outcome {
                return Ok(NO_PLAN_TOTAL);
            }
        }
    }

    fn select_plan(&mut self) -> Result<Step> {
        let plans = self.manager.plan_names().join(", ");
        writeln!(self.output, "\nAvailable plans: {}", plans)?;

        let Some(name) = read_line(&mut self.input, &mut self.output, "Enter a plan name: ")?
        else {
            return Ok(Step::Finish);
        };

        if !self.manager.select_plan(&name) {
            writeln!(self.output, "{}", self.palette.error("Invalid or unavailable plan"))?;
            return Ok(Step::Continue);
        }

        match self.confirm("Confirm selected plan? (Y/N): ")? {
            Some(true) => {
                writeln!(self.output, "{}", self.palette.success("Plan successfully selected"))?;
                Ok(Step::Continue)
            }
            Some(false) => {
                self.manager.clear_plan();
                writeln!(self.output, "Plan selection cancelled")?;
                Ok(Step::Continue)
            }
            None => {
                self.manager.clear_plan();
                Ok(Step::Finish)
            }
        }
    }

    fn add_feature(&mut self) -> Result<Step> {
        let features = self.manager.feature_names().join(", ");
        writeln!(self.output, "Features: {}", features)?;

        let Some(name) = read_line(&mut self.input, &mut self.output, "Enter a feature name: ")?
        else {
            return Ok(Step::Finish);
        };

        if !self.manager.add_feature(&name) {
            let message = self.palette.error("Invalid feature or already added");
            writeln!(self.output, "{}", message)?;
            return Ok(Step::Continue);
        }

        match self.confirm("Confirm adding this feature? (Y/N): ")? {
            Some(true) => {
                writeln!(self.output, "{}", self.palette.success("Feature added"))?;
                Ok(Step::Continue)
            }
            Some(false) => {
                self.manager.remove_feature(&name);
                writeln!(self.output, "Feature addition cancelled")?;
                Ok(Step::Continue)
            }
            None => {
                self.manager.remove_feature(&name);
                Ok(Step::Finish)
            }
        }
    }

    fn set_members(&mut self) -> Result<Step> {
        let Some(count) = ask_int(&mut self.input, &mut self.output, "Number of members: ")?
        else {
            return Ok(Step::Finish);
        };

        if !self.manager.set_members_count(count) {
            let message = self.palette.error("Number of members must be at least 1");
            writeln!(self.output, "{}", message)?;
            return Ok(Step::Continue);
        }

        writeln!(self.output, "{}", self.palette.success("Members count updated"))?;
        Ok(Step::Continue)
    }

    fn show_total(&mut self) -> Result<f64> {
        let (Some(plan), Some(breakdown)) =
            (self.manager.selected_plan(), self.manager.cost_breakdown())
        else {
            writeln!(self.output, "{}", self.palette.error("No plan selected"))?;
            return Ok(NO_PLAN_TOTAL);
        };

        let lines = breakdown_lines(
            &self.palette,
            self.manager.rules(),
            plan,
            self.manager.members_count(),
            &breakdown,
        );
        for line in lines {
            writeln!(self.output, "{}", line)?;
        }

        Ok(breakdown.total())
    }

    fn confirm_exit(&mut self) -> Result<Step> {
        match self.confirm("Exit? (Y/N): ")? {
            Some(false) => Ok(Step::Continue),
            Some(true) | None => {
                writeln!(self.output, "Finishing...")?;
                Ok(Step::Finish)
            }
        }
    }

    fn confirm(&mut self, message: &str) -> Result<Option<bool>> {
        ask_confirmation(&mut self.input, &mut self.output, message)
    }
}

enum Step {
    Continue,
    Finish,
}
