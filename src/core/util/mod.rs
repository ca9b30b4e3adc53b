pub mod time_expr_util;
