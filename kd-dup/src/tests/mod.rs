mod deployment_test;
mod session_test;

use httpmock::Method::*;
use kd_core::k8s::duplicate_name;
use kd_core::prelude::*;
use kd_testutils::*;
use doubles::*;
use rstest::*;
use tracing_test::traced_test;

use super::*;
use crate::duplicators::deployment::*;
use crate::duplicators::pod::*;
use crate::duplicators::statefulset::*;
use crate::objects::DuplicationError;
