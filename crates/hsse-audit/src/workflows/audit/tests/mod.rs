mod common;
mod remediation;
mod routing;
