use crate::app::AppContext;
use crate::domain::{AppError, Dimension, DimensionId};
use crate::ports::{BundleStore, TennerSource};

/// Execute the options command: the ten options of one dimension.
pub fn execute<S, B>(ctx: &AppContext<S, B>, dimension: &str) -> Result<Dimension, AppError>
where
    S: TennerSource,
    B: BundleStore,
{
    let id: DimensionId = dimension.parse()?;
    let registry = ctx.registry();
    registry.dimension(id).cloned().ok_or_else(|| AppError::UnknownDimension(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AnamaliaConfig;
    use crate::testing::{MemoryBundleStore, MemoryTennerSource};

    #[test]
    fn lists_ten_options_with_derived_ids() {
        let ctx = AppContext::new(
            AnamaliaConfig::default(),
            MemoryTennerSource::sample(),
            MemoryBundleStore::new(),
        );
        let dimension = execute(&ctx, "t4").unwrap();
        assert_eq!(dimension.options.len(), 10);
        assert_eq!(dimension.options[7].id, "t4_07");
        assert_eq!(dimension.category, "accessory");
    }

    #[test]
    fn degraded_registry_has_no_dimensions() {
        let ctx = AppContext::new(
            AnamaliaConfig::default(),
            MemoryTennerSource::missing(),
            MemoryBundleStore::new(),
        );
        assert!(matches!(execute(&ctx, "T1"), Err(AppError::UnknownDimension(_))));
    }
}
