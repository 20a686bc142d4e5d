use super::assembler::assemble_script;
use super::types::{ReconciliationScript, ScriptHeader, SummaryCounts};
use crate::catalog::CatalogConnection;
use crate::error::Result;
use crate::progress::Phase;
use std::future::Future;
use tracing::{info, warn};

/// 依次建立源库、目标库连接，组装脚本后关闭两条连接
///
/// 目标库连接失败时先关闭已建立的源库连接再返回错误；
/// 源库连接失败时不会尝试连接目标库。
pub async fn compare_catalogs<S, T, FS, FT>(
    connect_source: FS,
    connect_target: FT,
    header: &ScriptHeader,
) -> Result<(ReconciliationScript, SummaryCounts)>
where
    S: CatalogConnection,
    T: CatalogConnection,
    FS: Future<Output = Result<S>>,
    FT: Future<Output = Result<T>>,
{
    Phase::ConnectSource.report();
    let mut source = connect_source.await?;
    info!("✓ 已连接源数据库");

    Phase::ConnectTarget.report();
    let mut target = match connect_target.await {
        Ok(target) => target,
        Err(e) => {
            close_quietly(source, "源库").await;
            return Err(e);
        }
    };
    info!("✓ 已连接目标数据库");

    let assembled = assemble_script(&mut source, &mut target, header).await;

    close_quietly(source, "源库").await;
    close_quietly(target, "目标库").await;

    Ok(assembled)
}

async fn close_quietly<C: CatalogConnection>(conn: C, side: &str) {
    if let Err(e) = conn.close().await {
        warn!("⚠️  关闭{}连接失败: {}", side, e);
    }
}
