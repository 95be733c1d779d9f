use crate::app::AppContext;
use crate::domain::{AppError, AssemblyOutcome, Selection};
use crate::ports::{BundleStore, TennerSource};

/// Execute the assemble command.
///
/// `preview` composes an incomplete single-mode plan instead of stopping.
pub fn execute<S, B>(
    ctx: &AppContext<S, B>,
    selection: &Selection,
    preview: bool,
) -> Result<AssemblyOutcome, AppError>
where
    S: TennerSource,
    B: BundleStore,
{
    ctx.assembler().assemble(selection, ctx.assemble_options(preview))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AnamaliaConfig;
    use crate::domain::DimensionId;
    use crate::testing::{MemoryBundleStore, MemoryTennerSource};

    fn ctx(config: AnamaliaConfig) -> AppContext<MemoryTennerSource, MemoryBundleStore> {
        AppContext::new(config, MemoryTennerSource::sample(), MemoryBundleStore::new())
    }

    fn incomplete() -> Selection {
        let mut selection = Selection::default();
        selection.tenner.dimensions = vec![DimensionId::new(2).unwrap()];
        selection
    }

    #[test]
    fn incomplete_plan_stops_without_preview() {
        let outcome = execute(&ctx(AnamaliaConfig::default()), &incomplete(), false).unwrap();
        assert!(matches!(outcome, AssemblyOutcome::Incomplete(_)));
    }

    #[test]
    fn preview_flag_or_config_allows_partial() {
        let preview = execute(&ctx(AnamaliaConfig::default()), &incomplete(), true).unwrap();
        assert!(preview.bundle().is_some());

        let mut config = AnamaliaConfig::default();
        config.assemble.allow_partial = true;
        assert!(execute(&ctx(config), &incomplete(), false).unwrap().bundle().is_some());
    }

    #[test]
    fn missing_dataset_still_assembles() {
        let ctx = AppContext::new(
            AnamaliaConfig::default(),
            MemoryTennerSource::missing(),
            MemoryBundleStore::new(),
        );
        let selection = Selection { pose: "polite_bow".into(), ..Default::default() };
        let outcome = execute(&ctx, &selection, false).unwrap();
        assert!(outcome.bundle().unwrap().prompt.contains("bowing politely"));
    }
}
