use kd_core::prelude::*;
use kd_dup::DuplicateRegistry;

use crate::util::render_duplicated_table;

pub async fn cmd(client: kube::Client, namespace: &str) -> EmptyResult {
    let registry = DuplicateRegistry::new(client);
    let objs = registry.list_duplicated(namespace).await?;

    if objs.is_empty() {
        println!("No duplicated resources found in namespace {namespace:?}");
        return Ok(());
    }

    print!("{}", render_duplicated_table(&objs));
    Ok(())
}
