use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use erewhon_installer::errors::LaunchFailure;
use erewhon_installer::fs::mock::MockFileSystem;
use erewhon_installer::launch::{preflight, ChildProcessDescriptor, ProcessSpawner, SpawnReceipt};

/// A fake spawner that:
/// - records every descriptor it is asked to start
/// - checks the descriptor against a `MockFileSystem` the same way the real
///   spawner checks the disk
/// - "starts" present executables with increasing fake pids.
#[derive(Debug, Clone)]
pub struct FakeSpawner {
    fs: MockFileSystem,
    requests: Arc<Mutex<Vec<ChildProcessDescriptor>>>,
    started: Arc<Mutex<Vec<ChildProcessDescriptor>>>,
}

impl FakeSpawner {
    pub fn new(fs: MockFileSystem) -> Self {
        Self {
            fs,
            requests: Arc::new(Mutex::new(Vec::new())),
            started: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every spawn request issued, successful or not.
    pub fn requests(&self) -> Vec<ChildProcessDescriptor> {
        self.requests.lock().unwrap().clone()
    }

    /// Requests that resulted in a (fake) running process.
    pub fn started(&self) -> Vec<ChildProcessDescriptor> {
        self.started.lock().unwrap().clone()
    }
}

impl ProcessSpawner for FakeSpawner {
    fn start_detached(
        &mut self,
        descriptor: ChildProcessDescriptor,
    ) -> Pin<Box<dyn Future<Output = Result<SpawnReceipt, LaunchFailure>> + Send + '_>> {
        let fs = self.fs.clone();
        let requests = Arc::clone(&self.requests);
        let started = Arc::clone(&self.started);

        Box::pin(async move {
            requests.lock().unwrap().push(descriptor.clone());
            preflight(&fs, &descriptor)?;

            let mut guard = started.lock().unwrap();
            guard.push(descriptor);
            let pid = 1000 + guard.len() as u32;
            Ok(SpawnReceipt { pid: Some(pid) })
        })
    }
}
