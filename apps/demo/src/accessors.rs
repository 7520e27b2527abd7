//! The `DataArray` accessor: statistics and unit helpers reachable as
//! `array.stats.mean()`, `array.stats.spread.range()` and
//! `array.units.scale(factor, unit=...)`.

use crate::data::DataArray;
use xacc::prelude::*;

/// Builds the accessor namespace for [`DataArray`] values.
///
/// # Errors
/// Propagates registration failures.
pub fn data_array_accessor() -> Result<Namespace, NamespaceError> {
    let accessor = Namespace::new("DataArrayAccessor");

    accessor.register_fn_path(["stats", "mean"], |data: &Value, _args: Args| {
        let array = data_array(data, "mean")?;
        Ok(array.mean().map_or(Value::None, Value::Float))
    })?;

    accessor.register_fn_path(["stats", "len"], |data: &Value, _args: Args| {
        let array = data_array(data, "len")?;
        let len = i64::try_from(array.len()).map_err(|e| AttrError::from(e.to_string()))?;
        Ok(Value::Int(len))
    })?;

    accessor.register_fn_path(["stats", "spread", "range"], |data: &Value, _args: Args| {
        let array = data_array(data, "range")?;
        Ok(array.range().map_or(Value::None, Value::Float))
    })?;

    // scale(factor, unit=<current unit>)
    accessor.register_fn_path(["units", "scale"], |data: &Value, args: Args| {
        let array = data_array(data, "scale")?;
        let factor = args.get(0).and_then(Value::as_float).ok_or_else(|| {
            invalid_argument("scale", "factor", "expected a number as first argument")
        })?;
        let unit = match args.keyword("unit") {
            Some(unit) => unit
                .as_str()
                .ok_or_else(|| invalid_argument("scale", "unit", "expected a string"))?,
            None => array.unit(),
        };
        Ok(Value::opaque(array.scaled(factor, unit)))
    })?;

    accessor.register_fn_path(["units", "name"], |data: &Value, _args: Args| {
        Ok(Value::from(data_array(data, "name")?.unit()))
    })?;

    Ok(accessor)
}

fn data_array<'a>(data: &'a Value, function: &str) -> Result<&'a DataArray, AttrError> {
    data.downcast_ref::<DataArray>().ok_or_else(|| AttrError::InvalidValue {
        target: format!("{function}()").into(),
        name: "data".into(),
        message: format!("expected DataArray, got {}", data.type_name()).into(),
        context: None,
    })
}

fn invalid_argument(function: &str, name: &'static str, message: &'static str) -> AttrError {
    AttrError::InvalidValue {
        target: format!("{function}()").into(),
        name: name.into(),
        message: message.into(),
        context: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NamespaceInstance {
        data_array_accessor()
            .unwrap()
            .bind(Value::opaque(DataArray::new(vec![1.0, 4.0, 2.0, 5.0], "m")))
    }

    #[test]
    fn statistics_are_reachable_by_path() {
        let array = sample();
        assert_eq!(array.call(["stats", "mean"], Args::new()).unwrap(), Value::Float(3.0));
        assert_eq!(array.call(["stats", "len"], Args::new()).unwrap(), Value::Int(4));
        assert_eq!(
            array.call(["stats", "spread", "range"], Args::new()).unwrap(),
            Value::Float(4.0)
        );
    }

    #[test]
    fn scale_honours_positional_and_keyword_arguments() {
        let array = sample();
        let scaled = array.call(["units", "scale"], Args::new().arg(10.0).kwarg("unit", "dm"));
        let scaled = scaled.unwrap();
        let scaled = scaled.downcast_ref::<DataArray>().unwrap();
        assert_eq!(scaled.values(), &[10.0, 40.0, 20.0, 50.0]);
        assert_eq!(scaled.unit(), "dm");

        let kept = array.call(["units", "scale"], Args::new().arg(2)).unwrap();
        assert_eq!(kept.downcast_ref::<DataArray>().unwrap().unit(), "m");
    }

    #[test]
    fn bad_arguments_are_reported() {
        let array = sample();
        let err = array.call(["units", "scale"], Args::new()).unwrap_err();
        assert!(matches!(err, NamespaceError::Attr { source: AttrError::InvalidValue { .. }, .. }));
    }

    #[test]
    fn foreign_data_is_refused() {
        let wrong = data_array_accessor().unwrap().bind("not an array");
        let err = wrong.call(["stats", "mean"], Args::new()).unwrap_err();
        assert!(err.to_string().contains("expected DataArray, got str"));
    }
}
