
use kd_testutils::*;
use rstest::*;

use crate::util::*;
