use clap::Args;

use crate::context::Context;
use crate::error::Result;
use crate::models::Datacenter;
use crate::output::DEFAULT_JUSTIFY;

#[derive(Args, Debug)]
pub struct DatacentersArgs {
    /// Display ids
    #[arg(long)]
    pub id: bool,
}

pub async fn run(ctx: &Context, args: DatacentersArgs) -> Result<Vec<Datacenter>> {
    let mut output_keys = vec!["iso", "name", "country"];
    if args.id {
        output_keys.push("id");
    }

    let result = ctx.datacenters.list().await?;
    for dc in &result {
        ctx.out.separator();
        ctx.out.generic(dc, &output_keys, DEFAULT_JUSTIFY);
    }
    Ok(result)
}
