use clap::Args;
use eyre::Result;
use sprig_blueprint::BlueprintRegistry;

use super::GlobalArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {}

impl ListCommand {
    pub fn run(&self, global: &GlobalArgs) -> Result<()> {
        let config = global.load_config();
        let registry = BlueprintRegistry::builtin();

        let report = ops::list(&registry, &config);
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
