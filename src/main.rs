use flatwhite::application::Application;
use flatwhite::logging::LogContext;
use flatwhite::{fw_info, fw_trace};

/// Minimal client: ticks a few frames and exits.
struct Sandbox {
    frames: u32,
}

impl Application for Sandbox {
    fn run(&mut self, log: &LogContext) -> anyhow::Result<()> {
        fw_info!(log, "sandbox running");
        for frame in 0..self.frames {
            fw_trace!(log, "frame {}", frame);
        }
        fw_info!(log, "sandbox finished after {} frames", self.frames);
        Ok(())
    }
}

fn create_application() -> Option<Box<dyn Application>> {
    Some(Box::new(Sandbox { frames: 3 }))
}

flatwhite::entry_point!(create_application);
