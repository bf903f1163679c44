/// Top-level description of an application and its command surface.
///
/// Hosts build one of these to mirror whatever their argument parser already
/// knows: the application name, its global flags, and the command tree.
#[derive(Debug, Clone, Default)]
pub struct App {
    pub name: String,
    pub description: String,
    pub flags: Vec<Flag>,
    pub commands: Vec<Command>,
}

impl App {
    pub fn new(name: impl Into<String>) -> Self {
        App {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn flag(mut self, flag: impl Into<Flag>) -> Self {
        self.flags.push(flag.into());
        self
    }

    pub fn command(mut self, command: Command) -> Self {
        self.commands.push(command);
        self
    }
}

/// One node in the command tree.
#[derive(Debug, Clone, Default)]
pub struct Command {
    pub name: String,
    /// One-line help text.
    pub usage: String,
    /// Longer help text, preferred over `usage` wherever only one is shown.
    pub description: String,
    pub aliases: Vec<String>,
    /// Hidden commands are excluded from every listing, subtree included.
    pub hidden: bool,
    /// Whether invoking this path executes anything, as opposed to a bare
    /// container that only holds subcommands.
    pub runnable: bool,
    pub flags: Vec<Flag>,
    pub subcommands: Vec<Command>,
}

impl Command {
    pub fn new(name: impl Into<String>) -> Self {
        Command {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn runnable(mut self) -> Self {
        self.runnable = true;
        self
    }

    pub fn flag(mut self, flag: impl Into<Flag>) -> Self {
        self.flags.push(flag.into());
        self
    }

    pub fn subcommand(mut self, command: Command) -> Self {
        self.subcommands.push(command);
        self
    }
}

/// A flag definition.
///
/// The set of kinds is closed on purpose: collection and rendering only ever
/// go through [`Flag::names`], [`Flag::env_vars`] and [`Flag::usage`], never
/// through the concrete kind, so adding a kind means adding a variant here
/// and nothing else.
#[derive(Debug, Clone)]
pub enum Flag {
    Bool(BoolFlag),
    String(StringFlag),
    Int(IntFlag),
}

impl Flag {
    /// All declared names. The first one is the canonical long form.
    pub fn names(&self) -> &[String] {
        match self {
            Flag::Bool(flag) => &flag.names,
            Flag::String(flag) => &flag.names,
            Flag::Int(flag) => &flag.names,
        }
    }

    /// Environment variables that can supply this flag's value.
    pub fn env_vars(&self) -> &[String] {
        match self {
            Flag::Bool(flag) => &flag.env_vars,
            Flag::String(flag) => &flag.env_vars,
            Flag::Int(flag) => &flag.env_vars,
        }
    }

    /// Help text, empty when none was declared.
    pub fn usage(&self) -> &str {
        match self {
            Flag::Bool(flag) => &flag.usage,
            Flag::String(flag) => &flag.usage,
            Flag::Int(flag) => &flag.usage,
        }
    }
}

/// A boolean switch.
#[derive(Debug, Clone, Default)]
pub struct BoolFlag {
    pub names: Vec<String>,
    pub env_vars: Vec<String>,
    pub usage: String,
}

impl BoolFlag {
    pub fn new(name: impl Into<String>) -> Self {
        BoolFlag {
            names: vec![name.into()],
            ..Default::default()
        }
    }

    pub fn alias(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    pub fn env(mut self, var: impl Into<String>) -> Self {
        self.env_vars.push(var.into());
        self
    }

    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }
}

impl From<BoolFlag> for Flag {
    fn from(flag: BoolFlag) -> Self {
        Flag::Bool(flag)
    }
}

/// A flag carrying a string value.
#[derive(Debug, Clone, Default)]
pub struct StringFlag {
    pub names: Vec<String>,
    pub env_vars: Vec<String>,
    pub usage: String,
}

impl StringFlag {
    pub fn new(name: impl Into<String>) -> Self {
        StringFlag {
            names: vec![name.into()],
            ..Default::default()
        }
    }

    pub fn alias(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    pub fn env(mut self, var: impl Into<String>) -> Self {
        self.env_vars.push(var.into());
        self
    }

    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }
}

impl From<StringFlag> for Flag {
    fn from(flag: StringFlag) -> Self {
        Flag::String(flag)
    }
}

/// A flag carrying an integer value.
#[derive(Debug, Clone, Default)]
pub struct IntFlag {
    pub names: Vec<String>,
    pub env_vars: Vec<String>,
    pub usage: String,
}

impl IntFlag {
    pub fn new(name: impl Into<String>) -> Self {
        IntFlag {
            names: vec![name.into()],
            ..Default::default()
        }
    }

    pub fn alias(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    pub fn env(mut self, var: impl Into<String>) -> Self {
        self.env_vars.push(var.into());
        self
    }

    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }
}

impl From<IntFlag> for Flag {
    fn from(flag: IntFlag) -> Self {
        Flag::Int(flag)
    }
}
