use kd_core::prelude::*;
use kd_dup::{
    Confirmer,
    DuplicateRegistry,
    StdinConfirmer,
};

use crate::util::render_duplicated_table;

pub async fn cmd(client: kube::Client, namespace: &str) -> EmptyResult {
    let mut registry = DuplicateRegistry::new(client);
    let objs = registry.list_duplicated(namespace).await?;

    if objs.is_empty() {
        println!("No duplicated resources found in namespace {namespace:?}");
        return Ok(());
    }

    print!("{}", render_duplicated_table(&objs));
    if !StdinConfirmer.confirm("Do you want to delete the listed resources?", false)? {
        return Ok(());
    }

    for obj in &objs {
        registry.delete(obj).await?;
        println!("deleted {} {}/{}", obj.gvk.kind, obj.namespace, obj.name);
    }
    Ok(())
}
