//! Update coordinator: install-if-missing, version comparison, operator choice.

use launcher_cli::application::services::install::{InstallPlan, Installer};
use launcher_cli::application::services::update::{
    UpdateOutcome, UpdateRequest, ask_yes_no, check_and_maybe_update,
};
use launcher_cli::infra::config::JsonConfigStore;
use launcher_cli::infra::fs::StdFs;
use launcher_cli::output::prompter::TerminalPrompter;
use tempfile::TempDir;

use crate::helpers::{
    FakeArchiveSource, FakeManifests, FakeSupervisor, Layout, RecordingReporter, ScriptedPrompter,
    install_fixture,
};

struct Harness {
    _dir: TempDir,
    layout: Layout,
    archives: FakeArchiveSource,
    supervisor: FakeSupervisor,
    reporter: RecordingReporter,
}

impl Harness {
    fn new(remote_release: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let layout = Layout::new(dir.path());
        Self {
            _dir: dir,
            layout,
            archives: FakeArchiveSource::release("world-hash-release", remote_release),
            supervisor: FakeSupervisor::default(),
            reporter: RecordingReporter::default(),
        }
    }

    async fn run(
        &self,
        manifests: &FakeManifests,
        prompter: &ScriptedPrompter,
    ) -> anyhow::Result<UpdateOutcome> {
        let installer = Installer {
            fs: &StdFs,
            configs: &JsonConfigStore,
            archives: &self.archives,
            supervisor: &self.supervisor,
            reporter: &self.reporter,
        };
        let request = UpdateRequest {
            app_name: "World Hash",
            local_dir: &self.layout.app_dir,
            manifest_path: &self.layout.manifest_path,
            remote_manifest_url: "https://example.invalid/package.json",
            install: InstallPlan {
                archive_url: "https://example.invalid/world-hash.tar.gz",
                archive_path: &self.layout.archive_path,
                target_dir: &self.layout.app_dir,
                config_path: &self.layout.config_path,
                build_steps: &[],
            },
        };
        check_and_maybe_update(&installer, manifests, prompter, &request).await
    }
}

#[tokio::test]
async fn missing_install_is_installed_without_asking_or_fetching() {
    let h = Harness::new("1.0.0");
    let manifests = FakeManifests::remote("1.0.0");
    let prompter = ScriptedPrompter::new(&[]);

    let outcome = h.run(&manifests, &prompter).await.unwrap();

    assert!(matches!(outcome, UpdateOutcome::Installed(_)));
    assert_eq!(prompter.count(), 0);
    assert_eq!(*manifests.remote_reads.lock().unwrap(), 0);
    assert!(h.layout.manifest_path.is_file());
}

#[tokio::test]
async fn equal_versions_are_up_to_date_without_prompt() {
    let h = Harness::new("1.2.0");
    install_fixture(&h.layout.app_dir, "1.2.0");
    let prompter = ScriptedPrompter::new(&[]);

    let outcome = h
        .run(&FakeManifests::remote("1.2.0"), &prompter)
        .await
        .unwrap();

    assert_eq!(
        outcome,
        UpdateOutcome::UpToDate {
            version: "1.2.0".to_string()
        }
    );
    assert_eq!(prompter.count(), 0);
    assert_eq!(h.archives.download_count(), 0);
}

#[tokio::test]
async fn numerically_equal_versions_are_up_to_date() {
    let h = Harness::new("1.2.0");
    install_fixture(&h.layout.app_dir, "v1.2.0");

    let outcome = h
        .run(&FakeManifests::remote("1.2.0"), &ScriptedPrompter::new(&[]))
        .await
        .unwrap();

    assert!(matches!(outcome, UpdateOutcome::UpToDate { .. }));
}

#[tokio::test]
async fn newer_remote_accepted_reinstalls() {
    let h = Harness::new("1.3.0");
    install_fixture(&h.layout.app_dir, "1.2.0");
    let prompter = ScriptedPrompter::new(&["yes"]);

    let outcome = h
        .run(&FakeManifests::remote("1.3.0"), &prompter)
        .await
        .unwrap();

    assert!(matches!(
        outcome,
        UpdateOutcome::Reinstalled { ref from, ref to, .. } if from == "1.2.0" && to == "1.3.0"
    ));
    assert_eq!(prompter.count(), 1);
    assert!(prompter.asked.borrow()[0].contains("World Hash (1.3.0)"));
    assert!(
        std::fs::read_to_string(&h.layout.manifest_path)
            .unwrap()
            .contains("1.3.0")
    );
}

#[tokio::test]
async fn declined_update_leaves_install_untouched() {
    let h = Harness::new("1.3.0");
    install_fixture(&h.layout.app_dir, "1.2.0");

    let outcome = h
        .run(&FakeManifests::remote("1.3.0"), &ScriptedPrompter::new(&["N"]))
        .await
        .unwrap();

    assert_eq!(
        outcome,
        UpdateOutcome::Declined {
            local: "1.2.0".to_string(),
            remote: "1.3.0".to_string()
        }
    );
    assert_eq!(h.archives.download_count(), 0);
    assert!(h.layout.app_dir.join("build").join("old.js").exists());
    assert!(h.reporter.position("Installation bypassed.").is_some());
}

#[tokio::test]
async fn older_remote_still_offers_the_change() {
    let h = Harness::new("1.0.0");
    install_fixture(&h.layout.app_dir, "1.2.0");
    let prompter = ScriptedPrompter::new(&["n"]);

    h.run(&FakeManifests::remote("1.0.0"), &prompter)
        .await
        .unwrap();

    assert_eq!(prompter.count(), 1);
}

#[tokio::test]
async fn unrecognised_answers_are_asked_again() {
    let h = Harness::new("1.3.0");
    install_fixture(&h.layout.app_dir, "1.2.0");
    let prompter = ScriptedPrompter::new(&["maybe", "", "  no thanks"]);

    let outcome = h
        .run(&FakeManifests::remote("1.3.0"), &prompter)
        .await
        .unwrap();

    assert!(matches!(outcome, UpdateOutcome::Declined { .. }));
    assert_eq!(prompter.count(), 3);
    assert_eq!(prompter.asked.borrow()[1], "(Y/N)");
    assert_eq!(h.reporter.warnings().len(), 2);
}

#[tokio::test]
async fn unreachable_remote_keeps_install_and_warns() {
    let h = Harness::new("9.9.9");
    install_fixture(&h.layout.app_dir, "1.2.0");
    let prompter = ScriptedPrompter::new(&[]);

    let outcome = h.run(&FakeManifests::offline(), &prompter).await.unwrap();

    assert_eq!(
        outcome,
        UpdateOutcome::CheckFailed {
            local: "1.2.0".to_string()
        }
    );
    assert_eq!(prompter.count(), 0);
    assert_eq!(h.archives.download_count(), 0);
    assert!(h.reporter.warnings()[0].contains("Could not fetch remote package"));
}

#[tokio::test]
async fn corrupt_local_manifest_is_fatal() {
    let h = Harness::new("1.0.0");
    std::fs::create_dir_all(&h.layout.app_dir).unwrap();
    std::fs::write(&h.layout.manifest_path, "{}").unwrap();

    let err = h
        .run(&FakeManifests::remote("1.0.0"), &ScriptedPrompter::new(&[]))
        .await
        .unwrap_err();

    assert!(format!("{err:#}").contains("launcher install"), "got: {err:#}");
}

#[test]
fn ask_yes_no_accepts_first_letter_in_any_case() {
    let reporter = RecordingReporter::default();
    assert!(ask_yes_no(&ScriptedPrompter::new(&["Yep"]), &reporter, "?").unwrap());
    assert!(!ask_yes_no(&ScriptedPrompter::new(&["nope"]), &reporter, "?").unwrap());
    assert!(reporter.warnings().is_empty());
}

#[test]
fn ask_yes_no_propagates_closed_input() {
    let err = ask_yes_no(
        &ScriptedPrompter::new(&[]),
        &RecordingReporter::default(),
        "?",
    )
    .unwrap_err();
    assert!(err.to_string().contains("unexpected prompt"));
}

#[test]
fn unattended_yes_no_accepts() {
    let reporter = RecordingReporter::default();
    assert!(ask_yes_no(&TerminalPrompter::new(true), &reporter, "Update? (Y/N)").unwrap());
    assert!(reporter.warnings().is_empty());
}
