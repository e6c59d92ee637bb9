//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a liftkit command isolated from the caller's AWS setup.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - Current directory set to the test working directory
    /// - AWS credential and region variables removed, IMDS disabled
    /// - NO_COLOR set
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("liftkit").expect("failed to find liftkit binary");
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("NO_COLOR", "1");
        cmd.env("AWS_EC2_METADATA_DISABLED", "true");
        for var in [
            "AWS_ACCESS_KEY_ID",
            "AWS_SECRET_ACCESS_KEY",
            "AWS_SESSION_TOKEN",
            "AWS_PROFILE",
            "AWS_REGION",
            "AWS_DEFAULT_REGION",
            "LIFTKIT_CONFIG",
            "LIFTKIT_LOG",
        ] {
            cmd.env_remove(var);
        }
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Run liftkit with arguments.
    pub fn run(&self, args: &[&str]) -> Output {
        self.cmd()
            .args(args)
            .output()
            .expect("failed to run liftkit")
    }

    /// Shortcut for `liftkit connect <fleet>`.
    pub fn connect(&self, fleet: &str) -> Output {
        self.run(&["connect", fleet])
    }

    /// Shortcut for `liftkit capacity`.
    pub fn capacity(&self, fleet: &str, args: &[&str]) -> Output {
        let mut full = vec!["capacity", "--fleet-id", fleet];
        full.extend_from_slice(args);
        self.run(&full)
    }
}
