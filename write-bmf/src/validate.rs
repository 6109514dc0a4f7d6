//! The pre-compilation validation pass

use std::fmt::{Debug, Display};

/// Pre-compilation validation of fonts.
///
/// Some requirements of the `.bmf` format are awkward to encode in the type
/// system, such as every glyph payload matching the size implied by the
/// header. These requirements are enforced via a validation pass.
pub trait Validate {
    /// Ensure that this object is well-formed, reporting any errors.
    ///
    /// This calls [validate_impl][Self::validate_impl] and collects any errors.
    fn validate(&self) -> Result<(), ValidationReport> {
        let mut ctx = ValidationCtx::default();
        self.validate_impl(&mut ctx);
        ctx.into_result(Some(()))
    }

    /// Validate this object.
    ///
    /// If you need to implement this directly, it should look something like:
    ///
    /// ```rust
    /// # use write_bmf::validate::{Validate, ValidationCtx};
    /// struct MyRecord {
    ///     my_values: Vec<u8>,
    /// }
    ///
    /// impl Validate for MyRecord {
    ///     fn validate_impl(&self, ctx: &mut ValidationCtx) {
    ///         ctx.in_table("MyRecord", |ctx| {
    ///             ctx.in_field("my_values", |ctx| {
    ///                 if self.my_values.len() > 255 {
    ///                     ctx.report("array is too long");
    ///                 }
    ///             })
    ///         })
    ///     }
    /// }
    /// ```
    fn validate_impl(&self, ctx: &mut ValidationCtx);
}

/// A context for collecting validation errors.
///
/// This is responsible for tracking the position in the object tree at which
/// a given error is reported.
///
/// ## paths/locations
///
/// As validation travels down through the object graph, the path is recorded
/// via appropriate calls to methods like [in_table][Self::in_table] and [in_field][Self::in_field].
#[derive(Clone, Debug, Default)]
pub struct ValidationCtx {
    cur_location: Vec<LocationElem>,
    errors: Vec<ValidationError>,
}

#[derive(Debug, Clone)]
struct ValidationError {
    error: String,
    location: Vec<LocationElem>,
}

/// One or more validation errors.
#[derive(Clone)]
pub struct ValidationReport {
    errors: Vec<ValidationError>,
}

#[derive(Debug, Clone)]
enum LocationElem {
    Table(&'static str),
    Field(&'static str),
    Index(usize),
}

impl ValidationCtx {
    /// Run the provided closure in the context of a new table.
    ///
    /// Errors reported in the closure will include the provided identifier
    /// in their path.
    pub fn in_table<R>(&mut self, name: &'static str, f: impl FnOnce(&mut ValidationCtx) -> R) -> R {
        self.with_elem(LocationElem::Table(name), f)
    }

    /// Run the provided closure in the context of a new field.
    ///
    /// Errors reported in the closure will be associated with the field.
    pub fn in_field<R>(&mut self, name: &'static str, f: impl FnOnce(&mut ValidationCtx) -> R) -> R {
        self.with_elem(LocationElem::Field(name), f)
    }

    /// Run the provided closure in the context of an array.
    pub fn in_array(&mut self, f: impl FnOnce(&mut ValidationCtx)) {
        self.with_elem(LocationElem::Index(0), f);
    }

    /// Run the provided closure in the context of a new array item.
    ///
    /// This must only be called in a closure passed to [in_array][Self::in_array].
    pub fn array_item(&mut self, f: impl FnOnce(&mut ValidationCtx)) {
        assert!(matches!(
            self.cur_location.last(),
            Some(LocationElem::Index(_))
        ));
        f(self);
        match self.cur_location.last_mut() {
            Some(LocationElem::Index(i)) => *i += 1,
            _ => panic!("array_item called outside of array"),
        }
    }

    /// Report a new error, associating it with the current path.
    pub fn report(&mut self, msg: impl Display) {
        self.errors.push(ValidationError {
            location: self.cur_location.clone(),
            error: msg.to_string(),
        });
    }

    /// `true` if no errors have been reported.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Finish validation, returning `value` if no errors were reported.
    ///
    /// A missing `value` with no reported errors is itself an error.
    pub fn into_result<T>(mut self, value: Option<T>) -> Result<T, ValidationReport> {
        match value {
            Some(value) if self.errors.is_empty() => Ok(value),
            _ => {
                if self.errors.is_empty() {
                    self.report("validation did not produce a value");
                }
                Err(ValidationReport {
                    errors: self.errors,
                })
            }
        }
    }

    fn with_elem<R>(&mut self, elem: LocationElem, f: impl FnOnce(&mut ValidationCtx) -> R) -> R {
        self.cur_location.push(elem);
        let result = f(self);
        self.cur_location.pop();
        result
    }
}

impl ValidationReport {
    /// The number of errors in this report.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The messages of the reported errors, without their locations.
    pub fn messages(&self) -> impl Iterator<Item = &str> + '_ {
        self.errors.iter().map(|e| e.error.as_str())
    }
}

impl Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let [error] = self.errors.as_slice() {
            return writeln!(f, "Validation error:\n{error}");
        }

        writeln!(f, "{} validation errors:", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "#{}\n{error}", i + 1)?;
        }
        Ok(())
    }
}

impl Debug for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl std::error::Error for ValidationReport {}

impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "\"{}\"", self.error)?;
        if self.location.is_empty() {
            return Ok(());
        }
        write!(f, "in: ")?;
        for elem in &self.location {
            match elem {
                LocationElem::Table(name) => write!(f, "{name}"),
                LocationElem::Field(name) => write!(f, ".{name}"),
                LocationElem::Index(idx) => write!(f, "[{idx}]"),
            }?;
        }
        writeln!(f)
    }
}
