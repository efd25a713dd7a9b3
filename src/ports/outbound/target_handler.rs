use crate::shared::Result;

/// TargetHandler port receiving every resolved license text
///
/// Called once per delivered license with its name, its extension (`""` or
/// starting with `.`) and its content. What "delivered" means (a directory,
/// an archive, memory) is up to the caller of the download.
pub trait TargetHandler {
    fn handle(&mut self, name: &str, extension: &str, content: &[u8]) -> Result<()>;
}

impl<F> TargetHandler for F
where
    F: FnMut(&str, &str, &[u8]) -> Result<()>,
{
    fn handle(&mut self, name: &str, extension: &str, content: &[u8]) -> Result<()> {
        self(name, extension, content)
    }
}
