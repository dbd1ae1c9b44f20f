use ddlgen::oracle::OracleClient;

pub fn test_connect_string() -> String {
    std::env::var("TEST_ORACLE_CONNECT_STRING")
        .unwrap_or("system/oracle@localhost:1521/XEPDB1".to_string())
}

pub fn create_test_client() -> anyhow::Result<OracleClient> {
    let cs: ddlgen::types::ConnectString = test_connect_string().parse()?;
    Ok(OracleClient::connect(&cs.username, &cs.password, &cs.alias)?)
}
