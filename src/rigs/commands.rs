use glam::DVec3;
use rustc_hash::FxHashSet;

use crate::constants::*;
use crate::core::{BlockPos, WorldId};

pub const NO_PERMISSION: &str = "§cYou don't have permission to use this command!";
pub const USAGE: &str = "§c/oilrigs <reload|forcedeposit>";
pub const UNKNOWN_SUBCOMMAND: &str = "§cUnknown command. Use /oilrigs <reload|forcedeposit>";
pub const PLAYERS_ONLY: &str = "§cThis command can only be used by players!";

/// An online player as seen by the plugin.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub name: String,
    pub world: WorldId,
    pub location: DVec3,
    pub permissions: FxHashSet<String>,
}

impl Player {
    pub fn new(name: &str, world: WorldId, location: DVec3) -> Self {
        Self {
            name: name.to_string(),
            world,
            location,
            permissions: FxHashSet::default(),
        }
    }

    pub fn with_permission(mut self, permission: &str) -> Self {
        self.permissions.insert(permission.to_string());
        self
    }

    pub fn block_pos(&self) -> BlockPos {
        BlockPos::containing(self.world, self.location)
    }
}

/// Who issued a command.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandSender {
    Console,
    Player(Player),
}

impl CommandSender {
    pub fn name(&self) -> &str {
        match self {
            CommandSender::Console => "CONSOLE",
            CommandSender::Player(p) => &p.name,
        }
    }

    /// The console holds every permission.
    pub fn has_permission(&self, permission: &str) -> bool {
        match self {
            CommandSender::Console => true,
            CommandSender::Player(p) => p.permissions.contains(permission),
        }
    }

    pub fn as_player(&self) -> Option<&Player> {
        match self {
            CommandSender::Console => None,
            CommandSender::Player(p) => Some(p),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AdminCommand {
    Reload,
    ForceDeposit,
}

/// Why a command line did not resolve to an [`AdminCommand`]. Each variant
/// maps to the reply the sender sees.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CommandRejection {
    NoPermission,
    MissingSubcommand,
    UnknownSubcommand,
}

impl CommandRejection {
    pub fn message(&self) -> &'static str {
        match self {
            CommandRejection::NoPermission => NO_PERMISSION,
            CommandRejection::MissingSubcommand => USAGE,
            CommandRejection::UnknownSubcommand => UNKNOWN_SUBCOMMAND,
        }
    }
}

pub fn is_rig_command(label: &str) -> bool {
    label.eq_ignore_ascii_case(COMMAND_NAME)
}

/// Permission first, then the subcommand.
pub fn parse(sender: &CommandSender, args: &[String]) -> Result<AdminCommand, CommandRejection> {
    if !sender.has_permission(ADMIN_PERMISSION) {
        return Err(CommandRejection::NoPermission);
    }
    let Some(sub) = args.first() else {
        return Err(CommandRejection::MissingSubcommand);
    };
    match sub.to_lowercase().as_str() {
        "reload" => Ok(AdminCommand::Reload),
        "forcedeposit" => Ok(AdminCommand::ForceDeposit),
        _ => Err(CommandRejection::UnknownSubcommand),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::OVERWORLD;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn admin() -> CommandSender {
        CommandSender::Player(Player::new("Op", OVERWORLD, DVec3::ZERO).with_permission(ADMIN_PERMISSION))
    }

    #[test]
    fn test_permission_checked_before_arguments() {
        let guest = CommandSender::Player(Player::new("Guest", OVERWORLD, DVec3::ZERO));
        assert_eq!(parse(&guest, &args(&[])), Err(CommandRejection::NoPermission));
        assert_eq!(parse(&guest, &args(&["reload"])), Err(CommandRejection::NoPermission));
    }

    #[test]
    fn test_subcommands_case_insensitive() {
        assert_eq!(parse(&admin(), &args(&["RELOAD"])), Ok(AdminCommand::Reload));
        assert_eq!(parse(&admin(), &args(&["ForceDeposit", "x"])), Ok(AdminCommand::ForceDeposit));
        assert_eq!(parse(&CommandSender::Console, &args(&["reload"])), Ok(AdminCommand::Reload));
    }

    #[test]
    fn test_usage_messages() {
        assert_eq!(
            parse(&admin(), &args(&[])).unwrap_err().message(),
            "§c/oilrigs <reload|forcedeposit>"
        );
        assert_eq!(
            parse(&admin(), &args(&["explode"])),
            Err(CommandRejection::UnknownSubcommand)
        );
    }

    #[test]
    fn test_command_label() {
        assert!(is_rig_command("OilRigs"));
        assert!(!is_rig_command("oilrig"));
    }
}
