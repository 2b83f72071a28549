mod selectors_test;

use kd_testutils::*;
use rstest::*;

use super::*;
use crate::macros::*;
use crate::prelude::*;
