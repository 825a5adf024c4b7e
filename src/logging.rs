// ==========================================
// 工单排程重排引擎 - 日志系统
// ==========================================
// 基于 tracing 生态; 过滤器优先取 RUST_LOG,
// 否则默认只放行本 crate 的 info 及以上事件
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

// 默认过滤指令: 本 crate info, 其余依赖 warn
const DEFAULT_DIRECTIVES: &str = "warn,workorder_reflow=info";

/// 初始化日志系统 (进程内只应调用一次)
///
/// # 环境变量
/// - RUST_LOG: 覆盖默认过滤器
///   例如: RUST_LOG=workorder_reflow=trace
pub fn init() {
    init_with_directives(DEFAULT_DIRECTIVES);
}

/// 以指定过滤指令初始化 (RUST_LOG 仍然优先)
///
/// # 参数
/// - `directives`: EnvFilter 过滤指令, 如 "warn,workorder_reflow=debug"
pub fn init_with_directives(directives: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    fmt().with_env_filter(filter).with_target(false).compact().init();
}

/// 初始化测试环境的日志系统 (重复调用安全)
///
/// 输出交给测试框架捕获, 级别固定为本 crate debug
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("workorder_reflow=debug"))
        .with_test_writer()
        .compact()
        .try_init();
}
