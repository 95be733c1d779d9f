use crate::domain::{AppError, DimensionId, PlanResult, TennerMode, TennerSelection};

/// Parse `T4` or `T4=7` into a dimension and an optional option index.
pub fn parse_dimension_arg(arg: &str) -> Result<(DimensionId, Option<usize>), AppError> {
    match arg.split_once('=') {
        Some((id, index)) => {
            let id: DimensionId = id.parse()?;
            let index = index.trim().parse::<usize>().map_err(|_| {
                AppError::InvalidSelection(format!("Option index in '{}' is not a number", arg))
            })?;
            Ok((id, Some(index)))
        }
        None => Ok((arg.parse()?, None)),
    }
}

/// Execute the plan command over `T{n}` or `T{n}=index` arguments.
pub fn execute(mode: TennerMode, args: &[String]) -> Result<PlanResult, AppError> {
    let mut tenner = TennerSelection { mode, ..Default::default() };
    for arg in args {
        let (id, index) = parse_dimension_arg(arg)?;
        tenner.dimensions.push(id);
        if let Some(index) = index {
            tenner.choices.insert(id, index);
        }
    }
    tenner.check()?;
    Ok(tenner.plan())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn batch_plan_counts() {
        assert_eq!(execute(TennerMode::Batch, &args(&["T1", "T2"])).unwrap().count(), Some(100));
    }

    #[test]
    fn single_plan_needs_every_choice() {
        let plan = execute(TennerMode::Single, &args(&["T1=3", "T2"])).unwrap();
        assert!(!plan.is_complete());
        assert!(plan.metadata_line().contains("missing T2"));
        assert_eq!(execute(TennerMode::Single, &args(&["T1=3", "T2=0"])).unwrap().count(), Some(1));
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(matches!(parse_dimension_arg("T40"), Err(AppError::InvalidDimensionId(_))));
        assert!(parse_dimension_arg("T4=x").is_err());
        assert!(execute(TennerMode::Batch, &args(&["T1", "T2", "T3", "T4"])).is_err());
        assert!(execute(TennerMode::Single, &args(&["T1=10"])).is_err());
    }
}
