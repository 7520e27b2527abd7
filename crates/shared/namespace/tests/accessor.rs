use std::sync::{Arc, LazyLock};
use xacc_namespace::{BoundMember, Namespace, NamespaceError};
use xacc_object::{
    Args, AttrError, Attributes, Callable, Value, get_nested_attr, has_nested_attr,
    set_nested_attr,
};

fn func(_data: &Value, _args: Args) -> Result<Value, AttrError> {
    Ok(Value::Int(1))
}

struct Fixture {
    accessor: Namespace,
    func: Callable,
    nested: Callable,
}

static FIXTURE: LazyLock<Fixture> = LazyLock::new(|| {
    let accessor = Namespace::new("Accessor");
    let func = accessor.register_fn("func", func).expect("register func");
    let nested =
        accessor.register_fn_path(["sub", "subsub", "func"], crate::func).expect("register nested");
    Fixture { accessor, func, nested }
});

#[test]
fn registered_functions_are_returned_as_is() {
    let fx = &*FIXTURE;
    let direct = fx.accessor.resolve("func").unwrap();
    assert!(direct.as_function().unwrap().ptr_eq(&fx.func));

    let nested = fx.accessor.resolve_path(["sub", "subsub", "func"]).unwrap();
    assert!(nested.as_function().unwrap().ptr_eq(&fx.nested));
}

#[test]
fn instances_call_registered_functions() {
    let fx = &*FIXTURE;
    let instance = fx.accessor.bind(Value::opaque(vec![0.0_f64; 3]));

    assert_eq!(instance.call(["func"], Args::new()).unwrap(), Value::Int(1));
    assert_eq!(instance.call(["sub", "subsub", "func"], Args::new()).unwrap(), Value::Int(1));
}

#[test]
fn bound_data_propagates_through_every_level() {
    let accessor = Namespace::new("Accessor");
    accessor
        .register_fn_path(["sub", "subsub", "data"], |data: &Value, _args: Args| Ok(data.clone()))
        .unwrap();

    let data = Value::opaque(String::from("array"));
    let instance = accessor.bind(data.clone());

    let sub = instance.resolve("sub").unwrap();
    let sub = sub.as_namespace().unwrap();
    assert_eq!(sub.data(), &data);

    let subsub = sub.resolve("subsub").unwrap();
    assert_eq!(subsub.as_namespace().unwrap().data(), &data);

    let got = instance.call(["sub", "subsub", "data"], Args::new()).unwrap();
    assert_eq!(got, data, "the very same data must reach the function");
}

#[test]
fn positional_and_keyword_arguments_follow_the_data() {
    let accessor = Namespace::new("Accessor");
    accessor
        .register_fn("scale", |data: &Value, args: Args| {
            let base = data.as_float().ok_or(AttrError::from("expected a number"))?;
            let factor = args.get(0).and_then(Value::as_float).unwrap_or(1.0);
            let offset = args.keyword("offset").and_then(Value::as_float).unwrap_or(0.0);
            Ok(Value::Float(base.mul_add(factor, offset)))
        })
        .unwrap();

    let instance = accessor.bind(2.0);
    let got = instance.call(["scale"], Args::new().arg(3.0).kwarg("offset", 1.0)).unwrap();
    assert_eq!(got, Value::Float(7.0));
}

#[test]
fn function_errors_surface_as_attribute_errors() {
    let accessor = Namespace::new("Accessor");
    accessor.register_fn("fail", |_: &Value, _: Args| Err(AttrError::from("boom"))).unwrap();

    let err = accessor.bind(Value::None).call(["fail"], Args::new()).unwrap_err();
    assert!(matches!(err, NamespaceError::Attr { source: AttrError::Internal { .. }, .. }));
}

#[test]
fn unknown_members_are_reported() {
    let fx = &*FIXTURE;
    let instance = fx.accessor.bind(Value::None);

    let err = instance.resolve("nope").unwrap_err();
    assert!(matches!(err, NamespaceError::UnknownMember { .. }));
    assert!(err.to_string().contains("Accessor"));
    assert!(err.to_string().contains("nope"));

    let err = instance.call(["sub", "nope"], Args::new()).unwrap_err();
    assert_eq!(err.to_string(), "'sub' object has no attribute \"nope\"");
}

#[test]
fn instances_refuse_assignment() {
    let instance = FIXTURE.accessor.bind(Value::None);
    assert!(matches!(
        instance.assign("x", Value::Int(1)),
        Err(NamespaceError::InstanceImmutable { .. })
    ));
    let err = set_nested_attr(&instance, ["sub", "x"], Value::Int(1)).unwrap_err();
    assert!(matches!(err, AttrError::ReadOnly { .. }));
    assert!(err.to_string().contains("Cannot set a value to the instance"));
}

#[test]
fn listings_union_children_and_functions() {
    let fx = &*FIXTURE;
    assert_eq!(fx.accessor.names(), vec!["func".to_owned(), "sub".to_owned()]);
    assert_eq!(fx.accessor.bind(Value::None).names(), fx.accessor.names());
    assert_eq!(fx.accessor.attr_names(), fx.accessor.names());
}

#[test]
fn nested_attribute_helpers_register_on_namespaces() {
    let accessor = Namespace::new("Accessor");
    let f = xacc_namespace::accessor_fn("func", func);

    // `Accessor.sub.subsub.func = func`
    set_nested_attr(&accessor, ["sub", "subsub", "func"], f.clone().into()).unwrap();
    let got = get_nested_attr(&accessor, ["sub", "subsub", "func"], None).unwrap();
    assert_eq!(got, Value::Callable(f));

    let err = set_nested_attr(&accessor, ["sub", "x"], Value::Int(3)).unwrap_err();
    assert!(matches!(err, AttrError::InvalidValue { .. }));
}

#[test]
fn nested_attribute_helpers_read_instances() {
    let fx = &*FIXTURE;
    let instance = fx.accessor.bind(Value::None);

    let method = get_nested_attr(&instance, ["sub", "subsub", "func"], None).unwrap();
    let method = method.as_callable().expect("bound method");
    assert_eq!(method.call(Args::new()).unwrap(), Value::Int(1));

    assert!(has_nested_attr(&instance, ["sub", "subsub"]).unwrap());
    assert!(!has_nested_attr(&instance, ["sub", "nope"]).unwrap());
    assert!(has_nested_attr(&instance, "sub").is_err());
}

#[test]
fn explicit_child_namespaces_can_be_nested() {
    let stats = Namespace::new("Stats");
    stats.register_fn("count", |_: &Value, _: Args| Ok(Value::Int(3))).unwrap();

    let accessor = Namespace::new("Accessor");
    accessor.register("stats", stats.clone()).unwrap();

    let member = accessor.resolve("stats").unwrap();
    assert!(member.as_namespace().unwrap().ptr_eq(&stats));

    let instance = accessor.bind(Value::None);
    assert!(matches!(instance.resolve("stats").unwrap(), BoundMember::Namespace(_)));
    assert_eq!(instance.call(["stats", "count"], Args::new()).unwrap(), Value::Int(3));
}

#[test]
fn construct_reads_of_unknown_names_declare_namespaces() {
    let accessor = Namespace::new("Accessor");
    assert!(has_nested_attr(&accessor, ["anything", "at", "all"]).unwrap());
    let deep = accessor.resolve_path(["anything", "at", "all"]).unwrap();
    assert_eq!(deep.as_namespace().unwrap().path(), "Accessor.anything.at.all");

    let object: Arc<dyn Attributes> = Arc::new(accessor.clone());
    assert_eq!(object.type_name(), "Accessor");
}
