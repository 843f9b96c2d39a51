//! Declared options and their per-invocation state.
//!
//! A [`FlagSet`] is built from a static `&[OptionSpec]` list. Each [`Flag`]
//! starts at its compiled default; the argument parser marks the ones the user
//! passed as changed, and the resolver may assign each remaining flag once.

use crate::error::GardenLoginError;
use crate::types::{OptionKind, OptionSpec, OptionValue, Source};

/// One declared option and its current state.
#[derive(Debug, Clone, PartialEq)]
pub struct Flag {
    spec: OptionSpec,
    value: OptionValue,
    changed: bool,
    source: Source,
}

impl Flag {
    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    pub fn kind(&self) -> OptionKind {
        self.spec.kind
    }

    pub fn spec(&self) -> &OptionSpec {
        &self.spec
    }

    pub fn value(&self) -> &OptionValue {
        &self.value
    }

    /// True once the flag has been assigned this invocation, either by the
    /// user on the command line or by the resolver.
    pub fn changed(&self) -> bool {
        self.changed
    }

    pub fn source(&self) -> &Source {
        &self.source
    }
}

/// The ordered option set of one command.
#[derive(Debug, Clone, PartialEq)]
pub struct FlagSet {
    flags: Vec<Flag>,
}

impl FlagSet {
    /// Create a flag set with every option at its compiled default.
    ///
    /// Errors if a descriptor's default does not parse as its own kind.
    pub fn new(specs: &[OptionSpec]) -> Result<Self, GardenLoginError> {
        let flags = specs
            .iter()
            .map(|spec| {
                let value =
                    spec.kind
                        .parse(spec.default)
                        .map_err(|reason| GardenLoginError::InvalidValue {
                            key: spec.name.into(),
                            reason,
                        })?;
                Ok(Flag {
                    spec: *spec,
                    value,
                    changed: false,
                    source: Source::Default,
                })
            })
            .collect::<Result<Vec<_>, GardenLoginError>>()?;
        Ok(Self { flags })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Flag> {
        self.flags.iter()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.flags.iter().map(Flag::name).collect()
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Flag> {
        self.flags.iter().find(|f| f.spec.name == name)
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut Flag, GardenLoginError> {
        self.flags
            .iter_mut()
            .find(|f| f.spec.name == name)
            .ok_or_else(|| GardenLoginError::UnknownOption(name.into()))
    }

    /// Assign a flag from its textual form, as passed on the command line.
    pub fn set(&mut self, name: &str, raw: &str) -> Result<(), GardenLoginError> {
        self.set_from(name, raw, Source::CommandLine)
    }

    /// Assign a flag from its textual form, recording where the text came from.
    ///
    /// On a parse failure the flag is left untouched.
    pub fn set_from(
        &mut self,
        name: &str,
        raw: &str,
        source: Source,
    ) -> Result<(), GardenLoginError> {
        let flag = self.get_mut(name)?;
        let value = flag
            .spec
            .kind
            .parse(raw)
            .map_err(|reason| GardenLoginError::InvalidValue {
                key: name.into(),
                reason,
            })?;
        flag.value = value;
        flag.changed = true;
        flag.source = source;
        Ok(())
    }

    /// Assign an already-typed value supplied on the command line.
    pub fn set_value(&mut self, name: &str, value: OptionValue) -> Result<(), GardenLoginError> {
        let flag = self.get_mut(name)?;
        if value.kind() != flag.spec.kind {
            return Err(GardenLoginError::InvalidValue {
                key: name.into(),
                reason: format!(
                    "expected {}, got {}",
                    flag.spec.kind.name(),
                    value.kind().name()
                ),
            });
        }
        flag.value = value;
        flag.changed = true;
        flag.source = Source::CommandLine;
        Ok(())
    }

    pub fn get_str(&self, name: &str) -> Result<&str, GardenLoginError> {
        match self.typed(name)? {
            OptionValue::String(s) => Ok(s),
            other => Err(self.mismatch(name, OptionKind::String, other)),
        }
    }

    pub fn get_bool(&self, name: &str) -> Result<bool, GardenLoginError> {
        match self.typed(name)? {
            OptionValue::Bool(b) => Ok(*b),
            other => Err(self.mismatch(name, OptionKind::Bool, other)),
        }
    }

    pub fn get_int(&self, name: &str) -> Result<i64, GardenLoginError> {
        match self.typed(name)? {
            OptionValue::Int(i) => Ok(*i),
            other => Err(self.mismatch(name, OptionKind::Int, other)),
        }
    }

    pub fn get_list(&self, name: &str) -> Result<&[String], GardenLoginError> {
        match self.typed(name)? {
            OptionValue::StringList(items) => Ok(items),
            other => Err(self.mismatch(name, OptionKind::StringList, other)),
        }
    }

    fn typed(&self, name: &str) -> Result<&OptionValue, GardenLoginError> {
        self.get(name)
            .map(Flag::value)
            .ok_or_else(|| GardenLoginError::UnknownOption(name.into()))
    }

    fn mismatch(&self, name: &str, wanted: OptionKind, got: &OptionValue) -> GardenLoginError {
        GardenLoginError::InvalidValue {
            key: name.into(),
            reason: format!("requested as {}, declared as {}", wanted.name(), got.kind().name()),
        }
    }
}
