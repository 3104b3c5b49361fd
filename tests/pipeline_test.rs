//! End-to-end generation runs against an in-memory project

use modsel::backup::{ArtifactState, BackupSlot};
use modsel::config::{GeneratorConfig, RegistrationStrategy};
use modsel::io::{MemoryFs, ProjectPaths};
use modsel::pipeline::Generator;
use modsel::selector::{ModuleSelector, PromptSelector};
use modsel::{ModselError, Result};
use pretty_assertions::assert_eq;
use std::io::Cursor;
use std::path::Path;

const FACADE: &str = r#"#include <murmure/modulefacade.hpp>

/* @!::AUTO_INCLUDES::@! */

void ModuleFacade::loadModules() {
  modules.clear();
  /* @!::AUTO_MODULES::@! */
  modulesLoaded = true;
}
"#;

const MAKEFILE: &str = "bin_PROGRAMS = murmure\nmurmure_SOURCES = murmure.cpp\n";

/// Selector returning a fixed choice, whatever the catalog
struct Preset(Vec<&'static str>);

impl ModuleSelector for Preset {
    fn select(&mut self, _catalog: &[String]) -> Result<Vec<String>> {
        Ok(self.0.iter().map(|s| s.to_string()).collect())
    }

    fn name(&self) -> &'static str {
        "preset"
    }
}

fn descriptor(tag: Option<&str>, class: &str) -> String {
    let mut text = String::from("#include <murmure/modules/module.hpp>\n\n/**\n");
    if let Some(tag) = tag {
        text.push_str(&format!(" * @name: {}\n", tag));
    }
    text.push_str(&format!("**/\n\nclass {} : public Module {{\npublic:\n}};\n", class));
    text
}

fn project() -> MemoryFs {
    MemoryFs::new()
        .with_file("/p/include/core/modules/module.hpp", "class Module {\n")
        .with_file("/p/include/core/modules/a.hpp", &descriptor(Some("alpha"), "ClassA"))
        .with_file("/p/include/core/modules/b.hpp", &descriptor(Some("beta"), "ClassB"))
        .with_file("/p/include/core/modules/c.hpp", &descriptor(None, "ClassC"))
        .with_file("/p/src/core/modulefacade.cpp", FACADE)
        .with_file("/p/src/Makefile.am", MAKEFILE)
}

fn paths() -> ProjectPaths {
    ProjectPaths::for_root(Path::new("/p"), &Default::default())
}

fn run(fs: &MemoryFs, config: &GeneratorConfig, selector: &mut dyn ModuleSelector) -> Result<()> {
    let generator = Generator::new(fs, paths(), config);
    generator.restore()?;
    generator.run(selector)?;
    Ok(())
}

fn facade(fs: &MemoryFs) -> String {
    fs.file(&paths().facade).unwrap()
}

fn manifest(fs: &MemoryFs) -> String {
    fs.file(&paths().manifest).unwrap()
}

#[test]
fn test_empty_selection_removes_markers() {
    let fs = project();
    run(&fs, &GeneratorConfig::default(), &mut Preset(vec![])).unwrap();

    assert_eq!(
        facade(&fs),
        r#"#include <murmure/modulefacade.hpp>


void ModuleFacade::loadModules() {
  modules.clear();
  modulesLoaded = true;
}
"#
    );
    assert_eq!(manifest(&fs), format!("{}murmure_SOURCES += \n", MAKEFILE));
}

#[test]
fn test_cross_product_registrations() {
    let fs = project();
    run(&fs, &GeneratorConfig::default(), &mut Preset(vec!["a", "b"])).unwrap();

    let facade = facade(&fs);
    assert!(facade.contains(
        "#include <core/modules/a.hpp>\n#include <core/modules/b.hpp>\n\nvoid ModuleFacade"
    ));
    assert!(facade.contains(concat!(
        "modules[\"alpha\"] = &getModuleInstance<ClassA>;\n",
        "modules[\"alpha\"] = &getModuleInstance<ClassB>;\n",
        "modules[\"beta\"] = &getModuleInstance<ClassA>;\n",
        "modules[\"beta\"] = &getModuleInstance<ClassB>;\n",
        "  modulesLoaded = true;\n",
    )));
    assert_eq!(
        manifest(&fs),
        format!("{}murmure_SOURCES += core/modules/a.cpp core/modules/b.cpp \n", MAKEFILE)
    );
}

#[test]
fn test_missing_name_shifts_cross_product() {
    let fs = project();
    run(&fs, &GeneratorConfig::default(), &mut Preset(vec!["c", "b"])).unwrap();

    let registrations: Vec<String> = facade(&fs)
        .lines()
        .filter(|l| l.starts_with("modules[\""))
        .map(str::to_string)
        .collect();
    assert_eq!(
        registrations,
        vec![
            "modules[\"beta\"] = &getModuleInstance<ClassC>;",
            "modules[\"beta\"] = &getModuleInstance<ClassB>;",
        ]
    );
}

#[test]
fn test_paired_strategy_keeps_modules_apart() {
    let fs = project();
    let config = GeneratorConfig {
        registration: RegistrationStrategy::Paired,
        ..Default::default()
    };
    run(&fs, &config, &mut Preset(vec!["a", "c", "b"])).unwrap();

    let registrations: Vec<String> = facade(&fs)
        .lines()
        .filter(|l| l.starts_with("modules[\""))
        .map(str::to_string)
        .collect();
    assert_eq!(
        registrations,
        vec![
            "modules[\"alpha\"] = &getModuleInstance<ClassA>;",
            "modules[\"beta\"] = &getModuleInstance<ClassB>;",
        ]
    );
}

#[test]
fn test_second_run_matches_first() {
    let fs = project();
    let config = GeneratorConfig::default();

    run(&fs, &config, &mut Preset(vec!["b", "a"])).unwrap();
    let first_facade = facade(&fs);
    let first_manifest = manifest(&fs);

    run(&fs, &config, &mut Preset(vec!["b", "a"])).unwrap();
    assert_eq!(facade(&fs), first_facade);
    assert_eq!(manifest(&fs), first_manifest);

    // Backups always hold the pristine artifacts
    assert_eq!(fs.file(&paths().facade_backup).unwrap(), FACADE);
    assert_eq!(fs.file(&paths().manifest_backup).unwrap(), MAKEFILE);
}

#[test]
fn test_restore_guard_without_backups_is_noop() {
    let fs = project();
    let config = GeneratorConfig::default();
    let report = Generator::new(&fs, paths(), &config).restore().unwrap();

    assert!(report.restored.is_empty());
    assert_eq!(facade(&fs), FACADE);
    assert_eq!(manifest(&fs), MAKEFILE);
}

#[test]
fn test_restore_guard_reports_each_artifact() {
    let fs = project();
    let config = GeneratorConfig::default();
    run(&fs, &config, &mut Preset(vec!["a"])).unwrap();

    let report = Generator::new(&fs, paths(), &config).restore().unwrap();
    assert_eq!(report.restored, vec![paths().facade, paths().manifest]);
    assert_eq!(facade(&fs), FACADE);
    assert_eq!(manifest(&fs), MAKEFILE);
}

#[test]
fn test_manifest_accumulates_when_backups_are_discarded() {
    let fs = project();
    let config = GeneratorConfig::default();

    for selection in [vec!["a"], vec!["a", "b"], vec!["a"]] {
        run(&fs, &config, &mut Preset(selection)).unwrap();
        // Accept the generated tree as the new baseline
        fs.remove(&paths().facade_backup);
        fs.remove(&paths().manifest_backup);
    }

    assert_eq!(
        manifest(&fs),
        format!(
            "{}{}{}{}",
            MAKEFILE,
            "murmure_SOURCES += core/modules/a.cpp \n",
            "murmure_SOURCES += core/modules/a.cpp core/modules/b.cpp \n",
            "murmure_SOURCES += core/modules/a.cpp \n",
        )
    );
}

#[test]
fn test_prompt_fallback_selects_in_catalog_order() {
    let fs = project();
    let config = GeneratorConfig::default();
    let mut selector = PromptSelector::new(Cursor::new("y\nN\nY\n"), Vec::new());

    let generator = Generator::new(&fs, paths(), &config);
    let report = generator.run(&mut selector).unwrap();

    assert_eq!(report.selection.as_slice(), &["a".to_string(), "c".to_string()]);
    let prompts = String::from_utf8(selector.into_output()).unwrap();
    assert_eq!(
        prompts,
        "Module <a> [Y/n]: Module <b> [Y/n]: Module <c> [Y/n]: "
    );
}

#[test]
fn test_missing_descriptor_aborts_before_any_write() {
    let fs = project();
    let config = GeneratorConfig::default();
    let generator = Generator::new(&fs, paths(), &config);
    let catalog = generator.scan().unwrap();
    fs.remove(Path::new("/p/include/core/modules/b.hpp"));

    let stems = vec!["a".to_string(), "b".to_string()];
    let selection = modsel::selector::SelectionSet::from_choices(stems.clone(), &stems);
    let result = generator.generate(selection, &catalog);

    assert!(matches!(result, Err(ModselError::Descriptor(_))));
    assert_eq!(facade(&fs), FACADE);
    assert_eq!(manifest(&fs), MAKEFILE);
    assert!(fs.file(&paths().facade_backup).is_none());
    assert!(fs.file(&paths().manifest_backup).is_none());
}

#[test]
fn test_failed_facade_write_leaves_backup_for_next_run() {
    let fs = project();
    let config = GeneratorConfig::default();
    fs.deny_writes(paths().facade);

    let result = run(&fs, &config, &mut Preset(vec!["a"]));
    assert!(matches!(result, Err(ModselError::Facade(_))));

    let slot = BackupSlot::new(&fs, &paths().facade, &paths().facade_backup);
    assert_eq!(slot.state(), ArtifactState::PendingRestore);
    assert_eq!(fs.file(&paths().facade_backup).unwrap(), FACADE);
    assert_eq!(manifest(&fs), MAKEFILE);
}

#[test]
fn test_duplicate_marker_aborts_without_backup() {
    let fs = project();
    fs.insert(paths().facade, "::AUTO_INCLUDES::\n::AUTO_INCLUDES::\n");
    let config = GeneratorConfig::default();

    let result = run(&fs, &config, &mut Preset(vec!["a"]));
    assert!(matches!(result, Err(ModselError::Template(_))));
    assert!(fs.file(&paths().facade_backup).is_none());
}
