/// Whether the handoff depends on the installation dialog's outcome.
///
/// - `Always`: start the application whatever the dialog reported (default,
///   the dialog is treated as always successful from the launcher's view).
/// - `RequireCompletedInstall`: only start it when the dialog reported a
///   completed install; otherwise surface a `DialogFailure`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LaunchPolicy {
    #[default]
    Always,
    RequireCompletedInstall,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_launches_unconditionally() {
        assert_eq!(LaunchPolicy::default(), LaunchPolicy::Always);
    }
}
