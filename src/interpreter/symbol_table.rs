use crate::error::RuntimeError;

/// Names bound when a session starts, in declaration order.
///
/// They are ordinary variables and can be reassigned like any other.
pub const PREDEFINED: &[(&str, f64)] = &[("pi", 3.141_592_653_5), ("e", 2.718_281_828_4), ("k", 1000.0)];

/// A named value in the symbol table.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// The variable name. Unique within a table.
    pub name:  String,
    /// The current value.
    pub value: f64,
}

/// The variables of one session.
///
/// Entries keep their declaration order and are never removed. Lookups are a
/// linear scan; sessions hold a handful of names.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    variables: Vec<Variable>,
}

impl SymbolTable {
    /// Creates a table with no variables at all.
    #[must_use]
    pub const fn new() -> Self {
        Self { variables: Vec::new() }
    }

    /// Creates a table holding the [`PREDEFINED`] constants.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::symbol_table::SymbolTable;
    ///
    /// let table = SymbolTable::with_constants();
    /// assert!(table.is_declared("pi"));
    /// assert_eq!(table.get_value("k", 1).unwrap(), 1000.0);
    /// ```
    #[must_use]
    pub fn with_constants() -> Self {
        let variables = PREDEFINED.iter()
                                  .map(|&(name, value)| Variable { name: name.to_string(),
                                                                   value })
                                  .collect();
        Self { variables }
    }

    /// Returns the value of `name`.
    ///
    /// # Errors
    /// Returns `RuntimeError::UndefinedName` if `name` was never declared.
    pub fn get_value(&self, name: &str, line: usize) -> Result<f64, RuntimeError> {
        self.variables
            .iter()
            .find(|v| v.name == name)
            .map(|v| v.value)
            .ok_or_else(|| RuntimeError::UndefinedName { name: name.to_string(),
                                                         line })
    }

    /// Overwrites the value of an existing variable. Never creates one.
    ///
    /// # Errors
    /// Returns `RuntimeError::UndefinedName` if `name` was never declared.
    pub fn set_value(&mut self, name: &str, value: f64, line: usize) -> Result<(), RuntimeError> {
        match self.variables.iter_mut().find(|v| v.name == name) {
            Some(variable) => {
                variable.value = value;
                Ok(())
            },
            None => Err(RuntimeError::UndefinedName { name: name.to_string(),
                                                      line }),
        }
    }

    /// Returns `true` if `name` has been declared.
    #[must_use]
    pub fn is_declared(&self, name: &str) -> bool {
        self.variables.iter().any(|v| v.name == name)
    }

    /// Adds a new variable.
    ///
    /// # Errors
    /// Returns `RuntimeError::DeclaredTwice` if `name` already exists; the
    /// existing value is left unchanged.
    pub fn declare(&mut self, name: &str, value: f64, line: usize) -> Result<(), RuntimeError> {
        if self.is_declared(name) {
            return Err(RuntimeError::DeclaredTwice { name: name.to_string(),
                                                     line });
        }
        self.variables.push(Variable { name: name.to_string(),
                                       value });
        Ok(())
    }

    /// Iterates over the variables in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.variables.iter()
    }

    /// The number of declared variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if no variable has been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_are_predefined_in_order() {
        let table = SymbolTable::with_constants();
        let names: Vec<&str> = table.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, ["pi", "e", "k"]);
        assert_eq!(table.get_value("pi", 1).unwrap(), 3.141_592_653_5);
        assert_eq!(table.get_value("e", 1).unwrap(), 2.718_281_828_4);
    }

    #[test]
    fn declare_then_lookup() {
        let mut table = SymbolTable::new();
        assert!(table.is_empty());
        table.declare("x", 4.0, 1).unwrap();
        assert!(table.is_declared("x"));
        assert_eq!(table.get_value("x", 1).unwrap(), 4.0);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn declaring_twice_keeps_first_value() {
        let mut table = SymbolTable::new();
        table.declare("x", 1.0, 1).unwrap();
        let err = table.declare("x", 2.0, 2).unwrap_err();
        assert_eq!(err,
                   RuntimeError::DeclaredTwice { name: "x".to_string(),
                                                 line: 2 });
        assert_eq!(table.get_value("x", 3).unwrap(), 1.0);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn set_value_never_creates() {
        let mut table = SymbolTable::new();
        let err = table.set_value("y", 2.0, 5).unwrap_err();
        assert_eq!(err,
                   RuntimeError::UndefinedName { name: "y".to_string(),
                                                 line: 5 });
        assert!(!table.is_declared("y"));
    }

    #[test]
    fn constants_can_be_reassigned() {
        let mut table = SymbolTable::with_constants();
        table.set_value("pi", 3.0, 1).unwrap();
        assert_eq!(table.get_value("pi", 1).unwrap(), 3.0);
    }

    #[test]
    fn unknown_lookup_fails() {
        let table = SymbolTable::with_constants();
        assert!(matches!(table.get_value("nope", 7),
                         Err(RuntimeError::UndefinedName { line: 7, .. })));
    }
}
