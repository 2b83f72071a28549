pub const TEST_NAMESPACE: &str = "test-namespace";
pub const TEST_POD: &str = "the-pod";
pub const TEST_DEPLOYMENT: &str = "the-deployment";
pub const TEST_STATEFULSET: &str = "the-statefulset";
pub const TEST_PVC: &str = "the-claim";
pub const TEST_NODE: &str = "node-1";
