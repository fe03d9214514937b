/// Read access to the shared configuration parameters of the running build.
#[cfg_attr(test, mockall::automock)]
pub trait BuildParameterSource: Send + Sync {
    /// The value of `name` in the running build's shared parameters.
    ///
    /// `None` when no build is running or the build does not define `name`.
    fn shared_parameter(&self, name: &str) -> Option<String>;
}
